use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug, LevelFilter};
use env_logger::{Builder, Target};

/// Directory holding session logs, `~/.helixlab/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".helixlab")
        .join("logs")
}

/// Initialize logging into a timestamped file; the terminal belongs to the UI
pub fn init_logging(level: LevelFilter) -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("helixlab_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));
    // RUST_LOG directives are applied on top of the configured level
    file_logger(&log_file, level)?.parse_default_env().try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

fn file_logger(log_file: &Path, level: LevelFilter) -> Result<Builder, Box<dyn Error>> {
    let mut builder = Builder::new();
    builder
        .filter_module("helixlab", level)
        .target(Target::Pipe(Box::new(std::fs::File::create(log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        });
    Ok(builder)
}

/// Log system information at startup
pub fn log_system_info() {
    info!("=== HelixLab Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("HELIXLAB_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== HelixLab Shutting Down ===");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error and mirror it to stderr, which is visible once the terminal is restored
pub fn log_critical_error(error: &str, context: Option<&str>) {
    let message = match context {
        Some(ctx) => format!("CRITICAL ERROR [{ctx}]: {error}"),
        None => format!("CRITICAL ERROR: {error}"),
    };

    error!("{message}");
    eprintln!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_logger_creates_log_file() {
        let temp_dir = tempdir().unwrap();
        let log_file = temp_dir.path().join("session.log");

        let result = file_logger(&log_file, LevelFilter::Debug);
        assert!(result.is_ok());
        assert!(log_file.exists());
    }

    #[test]
    fn test_log_dir_is_under_helixlab() {
        assert!(log_dir().ends_with(".helixlab/logs"));
    }
}
