use tracing_subscriber::EnvFilter;

/// Workspace crate targets receiving log output.
const CRATE_TARGETS: &[&str] = &[
    "cortex",
    "cortex_correlate",
    "cortex_graph",
    "cortex_interpolate",
    "cortex_phase",
    "cortex_signal",
    "cortex_smooth",
];

/// Initialize tracing from the CLI verbosity counter: 0 -> warn, 1 -> info,
/// 2 -> debug, 3+ -> trace. A set `RUST_LOG` env var wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> =
            CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
