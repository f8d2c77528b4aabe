use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

pub fn init() {
    // Default to info; RUST_LOG overrides (e.g. RUST_LOG=debug for per-page output).
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("Logger initialized.");
}
