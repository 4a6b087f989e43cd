//! Logger initialization for the CLI.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gles_shapes=debug"). Without it, `RUST_LOG` is used, falling back to INFO.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
