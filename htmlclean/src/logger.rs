// htmlclean/src/logger.rs
//! Logger setup for the CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initialises `env_logger`.
///
/// `RUST_LOG` is honoured unless `level` is given, in which case it wins.
/// Without either, only warnings and errors are shown. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
