// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Terminal logging for the CLI. `RUST_LOG` wins over `verbose`.
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// File logging for the GUI (no console there): appends to `.store/debug.log`.
pub fn init_file() {
    let opened = fs::create_dir_all(STORE_DIR).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(STORE_DIR).join(LOG_FILE))
    });

    match opened {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(true))
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(_) => init_stderr(false),
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logw_emits_at_warn_level() {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            logd!("below threshold");
            logw!("Config: lotto.toml is broken; using defaults");
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("WARN"), "{out}");
        assert!(out.contains("Config: lotto.toml is broken; using defaults"));
        assert!(!out.contains("below threshold"));
    }
}
