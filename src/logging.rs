use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber; `RUST_LOG` wins over `verbose`
pub fn init(verbose: bool) {
    let default = if verbose {
        "processos_dashboard=debug,processos_common=debug"
    } else {
        "processos_dashboard=warn,processos_common=warn"
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
