use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
