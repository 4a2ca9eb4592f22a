use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::Level;
use std::io::Write;

/// Progress lines go to stdout, warnings and errors to stderr.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| {
            let line = format!(
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
            // env_logger has a single target, so warnings and errors skip `buf` and go to stderr.
            if record.level() <= Level::Warn {
                writeln!(std::io::stderr(), "{}", line)
            } else {
                writeln!(buf, "{}", line)
            }
        })
        .init();

    log::debug!("Logger initialized.");
}
