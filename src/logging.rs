use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the CLI. Logs go to stderr so stdout
/// only carries the payment confirmation.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "paymethod=debug"
    } else {
        "paymethod=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
