use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(debug: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Only our crates get the chosen level; RUST_LOG can add more
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("hangout_core={level}").parse()?)
        .add_directive(format!("hangout={level}").parse()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug)
                .with_file(debug)
                .with_line_number(debug),
        )
        .with(env_filter)
        .init();

    Ok(())
}
