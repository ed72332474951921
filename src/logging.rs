//! Logger setup.
//!
//! Everything in the crate logs through the `log` facade. In the browser (`web`
//! feature on `wasm32`) records go to the developer console via `wasm-logger`.
//! Everywhere else `env_logger` is used, with `RUST_LOG` overriding the configured
//! level.

use crate::config::LogLevel;

/// Installs the global logger. Calling it again is harmless; the first logger stays.
pub fn init(level: LogLevel) {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level.to_level()));
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init(LogLevel::Debug);
        init(LogLevel::Trace);
        log::debug!("logger installed");
    }
}
