#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use i18n_tools::cli::{self, SeedCli};
use i18n_tools::terms::seed_terms_file;

fn main() -> Result<()> {
    let cli = SeedCli::parse();

    cli::initialize_tracing(cli.log);

    let app_config = cli::load_app_config()?;
    let target = cli.target.unwrap_or_else(|| app_config.merge_target());

    let report = seed_terms_file(&target, &cli.terms)
        .with_context(|| format!("Failed to seed terms into {}", target.display()))?;

    println!(
        "Seeded {} new term(s) into {} ({} already present, {} skipped).",
        report.added.len(),
        target.display(),
        report.existing,
        report.rejected
    );

    Ok(())
}
