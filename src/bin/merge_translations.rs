#![allow(missing_docs)]

use clap::Parser;
use i18n_tools::cli::{self, MergeCli};
use i18n_tools::merge::merge_translation_files;
use i18n_tools::LocaleError;
use tracing::error;

fn main() {
    let cli = MergeCli::parse();

    cli::initialize_tracing(cli.log);

    let app_config = match cli::load_app_config() {
        Ok(app_config) => app_config,
        Err(e) => {
            error!("Configuration could not be loaded: {e:#}");
            println!("An error occurred: {e:#}");
            return;
        },
    };
    let target = cli.target.unwrap_or_else(|| app_config.merge_target());
    let source = cli.source.unwrap_or_else(|| app_config.merge_source());

    // Handled failures are reported and end the run without a failing status
    match merge_translation_files(&target, &source, &app_config.garbage_keys()) {
        Ok(report) => {
            println!("Successfully updated {} entries.", report.updated_count());
        },
        Err(e @ LocaleError::MissingFile { .. }) => {
            println!("Error: {e}");
        },
        Err(e) => {
            error!("Merge of {} into {} failed: {e}", source.display(), target.display());
            println!("An error occurred: {e}");
        },
    }
}
