use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow `-v`. Everything else stays at `warn`.
const CRATE_TARGETS: [&str; 4] = ["flexcal", "flexcal_calendar", "flexcal_grid", "flexcal_pager"];

/// Sends log output to stderr so that stdout carries only grids and events.
///
/// `RUST_LOG` replaces the `-v` derived filter when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    let mut out = String::from("warn");
    for target in CRATE_TARGETS {
        out.push_str(&format!(",{target}={level}"));
    }
    out
}
