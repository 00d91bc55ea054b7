//! The `list` subcommand: discover subject files.

use anyhow::{Context, Result};
use serde::Serialize;

use cortex_signal::{SubjectFile, list_subject_files};

use crate::cli::ListArgs;
use crate::config::CortexConfig;

#[derive(Serialize)]
struct Listing {
    files: Vec<SubjectFile>,
    data_dir: String,
}

/// Run the `list` subcommand.
pub fn run(args: ListArgs) -> Result<()> {
    let config = CortexConfig::load(&args.config)?;
    let files = list_subject_files(&config.data.dir).with_context(|| {
        format!("failed to list subject files in {}", config.data.dir.display())
    })?;

    let listing = Listing {
        files,
        data_dir: config.data.dir.display().to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
