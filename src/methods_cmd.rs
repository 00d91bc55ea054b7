//! The `methods` subcommand: enumerate the closed method catalogue.

use anyhow::Result;
use serde::Serialize;

use cortex_correlate::{MAX_STEP, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};

/// One catalogue entry describing a correlation method.
#[derive(Serialize)]
struct MethodInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    symmetric: bool,
    params: Vec<ParamInfo>,
}

/// Bounds of one integer parameter.
#[derive(Serialize)]
struct ParamInfo {
    name: &'static str,
    default: usize,
    min: usize,
    max: usize,
}

fn window_params() -> Vec<ParamInfo> {
    vec![
        ParamInfo {
            name: "window_size",
            default: 30,
            min: MIN_WINDOW_SIZE,
            max: MAX_WINDOW_SIZE,
        },
        ParamInfo {
            name: "step",
            default: 1,
            min: 1,
            max: MAX_STEP,
        },
    ]
}

/// Run the `methods` subcommand.
pub fn run() -> Result<()> {
    let methods = vec![
        MethodInfo {
            id: "pearson",
            name: "Pearson Correlation",
            description: "Linear correlation coefficient",
            symmetric: true,
            params: window_params(),
        },
        MethodInfo {
            id: "spearman",
            name: "Spearman Correlation",
            description: "Rank-based correlation (robust to outliers)",
            symmetric: true,
            params: window_params(),
        },
        MethodInfo {
            id: "wavelet",
            name: "Wavelet Leadership",
            description: "Lead/lag ratio from precomputed wavelet coherence phases",
            symmetric: false,
            params: window_params(),
        },
    ];

    println!("{}", serde_json::to_string_pretty(&methods)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_all_methods() {
        let params = window_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "window_size");
        assert_eq!(params[0].min, 5);
        assert_eq!(params[0].max, 100);
        assert_eq!(params[1].name, "step");
        assert_eq!(params[1].max, 100);
    }
}
