#![allow(missing_docs)]

use clap::Parser;
use i18n_tools::cli::{self, DedupeCli};
use i18n_tools::dedupe::dedupe_json_object_inplace;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = DedupeCli::parse();

    cli::initialize_tracing(cli.log);

    let path = match cli.path {
        Some(path) => path,
        None => match cli::load_app_config() {
            Ok(app_config) => app_config.dedupe_path(),
            Err(e) => {
                eprintln!("[autoremove] error: {e:#}");
                return ExitCode::from(2);
            },
        },
    };

    match dedupe_json_object_inplace(&path) {
        Ok(true) => {
            println!("[autoremove] deduped: {}", path.display());
            ExitCode::SUCCESS
        },
        Ok(false) => {
            println!("[autoremove] no changes: {}", path.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("[autoremove] error: {e}");
            ExitCode::from(2)
        },
    }
}
