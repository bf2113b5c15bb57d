use tracing::Level;

/// Installs the json subscriber on stderr, false if one was already installed.
pub fn setup_tracing(level: Level) -> bool {
    let res = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // the menu owns stdout, log lines go to stderr.
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
    match res {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("keeping existing tracing subscriber: {}", err);
            false
        }
    }
}
