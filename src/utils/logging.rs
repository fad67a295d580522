//! `env_logger` setup.
//!
//! The terminal is owned by the UI, so records go to `~/.hexquest/hexquest.log`.
//! Filter comes from `HEXQUEST_LOG` using `env_logger` syntax (default info).

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use super::persistence::{data_path, PersistenceError};

const LOG_FILE: &str = "hexquest.log";
const FILTER_ENV: &str = "HEXQUEST_LOG";
const DEFAULT_FILTER: &str = "info";

fn builder() -> Builder {
    Builder::from_env(Env::new().filter_or(FILTER_ENV, DEFAULT_FILTER))
}

/// Install the file logger. Safe to call more than once; later calls are ignored.
pub fn init() -> Result<(), PersistenceError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_path(LOG_FILE)?)?;
    if builder().target(Target::Pipe(Box::new(file))).try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}
