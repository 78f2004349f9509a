use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;
use time::macros::format_description;

/// Level named on the command line, or `None` if it is not one we know
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::Trace),
        "DEBUG" => Some(LevelFilter::Debug),
        "INFO" => Some(LevelFilter::Info),
        "WARN" | "WARNING" => Some(LevelFilter::Warn),
        "ERROR" => Some(LevelFilter::Error),
        "OFF" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// Install the stderr logger for a command run. Unknown levels run at INFO.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let level = parse_log_level(log_level);

    SimpleLogger::new()
        .with_level(level.unwrap_or(LevelFilter::Info))
        .with_timestamp_format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .init()
        .context("Failed to initialize logger")?;

    if level.is_none() {
        warn!("Unknown log level '{}', using INFO", log_level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level("WARNING"), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
