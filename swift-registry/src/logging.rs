//! Logger setup

use env_logger::Env;

/// Initialize `env_logger`; `RUST_LOG` overrides the default `info` level
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
