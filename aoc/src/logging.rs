use std::{io, sync::Once};

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Logs go to stderr so stdout only carries answers. Filter with `RUST_LOG`,
/// defaults to `info`. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // fails if another subscriber is already installed
        let _ = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("still alive");
    }
}
