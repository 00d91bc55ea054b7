//! The `graph` subcommand: run the full pipeline for one subject.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use cortex_correlate::{Method, MatrixSequence, fisher_transform, windowed_matrices};
use cortex_graph::{GraphOutput, build_output};
use cortex_interpolate::interpolate_sequence;
use cortex_phase::{leadership_matrices, load_dataset};
use cortex_signal::{
    load_phenotypes, long_labels, numeric_subject_id, parse_subject_file, short_labels,
    subject_id,
};
use cortex_smooth::smooth_sequence;

use crate::cli::{GraphArgs, MethodArg};
use crate::config::CortexConfig;
use crate::convert;

/// The emitted JSON document: graph frames plus subject passthrough data.
#[derive(Serialize)]
struct Payload {
    #[serde(flatten)]
    output: GraphOutput,
    subject: SubjectInfo,
}

/// Subject identity and phenotypic passthrough metadata.
#[derive(Serialize)]
struct SubjectInfo {
    id: String,
    diagnosis: Option<String>,
}

/// Run the `graph` subcommand.
pub fn run(args: GraphArgs) -> Result<()> {
    let config = CortexConfig::load(&args.config)?;
    let window_config = convert::build_window_config(&config.correlation, &args);
    let subject_path = config.data.dir.join(&args.file);

    // Stage 1: one matrix per window.
    let sequence = match args.method {
        MethodArg::Pearson | MethodArg::Spearman => {
            let method = match args.method {
                MethodArg::Pearson => Method::Pearson,
                MethodArg::Spearman => Method::Spearman,
                MethodArg::Wavelet => unreachable!("handled by the outer match"),
            };
            let signals = parse_subject_file(&subject_path)
                .with_context(|| format!("failed to load subject file: {}", args.file))?;
            info!(
                n_timepoints = signals.n_timepoints(),
                n_channels = signals.n_channels(),
                "subject signals loaded"
            );
            let sequence = windowed_matrices(&signals, method, &window_config)
                .context("windowed correlation failed")?;
            if config.correlation.fisher {
                fisher_transform(&sequence)
            } else {
                sequence
            }
        }
        MethodArg::Wavelet => {
            let dataset = load_dataset(&config.data.phase_dataset).with_context(|| {
                format!(
                    "failed to load phase dataset: {}",
                    config.data.phase_dataset.display()
                )
            })?;
            let id = numeric_subject_id(&subject_path)
                .context("wavelet method needs a numeric subject id")?;
            leadership_matrices(&dataset, id, &window_config)
                .context("leadership computation failed")?
        }
    };
    info!(frames = sequence.len(), "correlation matrices computed");

    // Stage 2/3: optional temporal transforms, interpolation first.
    let sequence = apply_transforms(sequence, &args)?;

    // Stage 4: frames + metadata.
    let metadata = BTreeMap::from([
        ("source".to_string(), "abide".to_string()),
        ("file".to_string(), args.file.clone()),
        ("method".to_string(), method_name(args.method).to_string()),
        (
            "window_size".to_string(),
            window_config.window_size().to_string(),
        ),
    ]);
    let description = format!(
        "subject file {} ({} correlation)",
        args.file,
        method_name(args.method)
    );
    let output = build_output(
        &sequence,
        &short_labels(),
        &long_labels(),
        &metadata,
        Some(description),
    )
    .context("graph building failed")?;

    let payload = Payload {
        output,
        subject: subject_info(&config, &subject_path)?,
    };

    let json = serde_json::to_string_pretty(&payload).context("JSON serialisation failed")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "graph output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Applies the optional interpolation and smoothing stages, in that order.
fn apply_transforms(sequence: MatrixSequence, args: &GraphArgs) -> Result<MatrixSequence> {
    let sequence = match convert::build_interpolation_config(args) {
        Some(config) => {
            let out =
                interpolate_sequence(&sequence, &config).context("interpolation failed")?;
            info!(frames = out.len(), kernel = config.kernel().name(), "sequence interpolated");
            out
        }
        None => sequence,
    };
    match convert::build_smoothing_kernel(args) {
        Some(kernel) => {
            let out = smooth_sequence(&sequence, &kernel).context("smoothing failed")?;
            info!(kernel = kernel.name(), "sequence smoothed");
            Ok(out)
        }
        None => Ok(sequence),
    }
}

/// Builds the subject passthrough record, attaching a diagnosis when a
/// phenotypics file is configured and lists this subject.
fn subject_info(config: &CortexConfig, subject_path: &std::path::Path) -> Result<SubjectInfo> {
    let id = subject_id(subject_path);
    let diagnosis = match (&config.data.phenotypics, numeric_subject_id(subject_path)) {
        (Some(path), Ok(numeric_id)) => {
            let phenotypes = load_phenotypes(path)
                .with_context(|| format!("failed to load phenotypics: {}", path.display()))?;
            phenotypes.diagnosis(numeric_id).map(String::from)
        }
        _ => None,
    };
    Ok(SubjectInfo { id, diagnosis })
}

fn method_name(method: MethodArg) -> &'static str {
    match method {
        MethodArg::Pearson => "pearson",
        MethodArg::Spearman => "spearman",
        MethodArg::Wavelet => "wavelet",
    }
}
