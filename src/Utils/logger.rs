use crate::symbolic::symbolic_errors::SymbolicError;
use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// Translates a level name into a filter; None stands for the default `info`
pub fn level_filter(loglevel: Option<&str>) -> Result<LevelFilter, SymbolicError> {
    let Some(level) = loglevel else {
        return Ok(LevelFilter::Info);
    };
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(SymbolicError::Config(format!(
            "loglevel must be trace, debug, info, warn, error or off, got '{}'",
            other
        ))),
    }
}

/// Installs the terminal logger of the crate.
///
/// Only the first call in a process installs a logger; later calls keep the logger that
/// is already there and return Ok.
///
/// # Examples
/// ```rust, ignore
/// init_logger(Some("debug"))?;
/// let expr = Expr::parse("2x + sin(x)")?; // split decisions are logged now
/// ```
pub fn init_logger(loglevel: Option<&str>) -> Result<(), SymbolicError> {
    let log_option = level_filter(loglevel)?;
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("logger started with loglevel: {}", log_option);
            Ok(())
        }
        // a logger is already installed
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(level_filter(None).unwrap(), LevelFilter::Info);
        assert_eq!(level_filter(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(level_filter(Some(" WARN ")).unwrap(), LevelFilter::Warn);
        assert_eq!(level_filter(Some("off")).unwrap(), LevelFilter::Off);
        assert!(matches!(
            level_filter(Some("loud")),
            Err(SymbolicError::Config(_))
        ));
    }

    #[test]
    fn test_init_logger_twice() {
        assert!(init_logger(Some("error")).is_ok());
        assert!(init_logger(Some("debug")).is_ok());
        assert!(init_logger(Some("loud")).is_err());
    }
}
