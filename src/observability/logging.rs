use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Installs a fmt subscriber driven by `RUST_LOG`, with `slack_notify=debug` added.
///
/// Meant for small binaries and scripts; a host that already installed its own
/// subscriber keeps it (the error from `try_init` is ignored).
pub fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(
        "slack_notify=debug"
            .parse()
            .unwrap_or_else(|_| LevelFilter::DEBUG.into()),
    );

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    let _ = subscriber.try_init();

    tracing::debug!(target: "slack_notify", "tracing initiated");
}
