use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Parses a filter from either a bare level (`debug`) or a directive list
/// (`porchest_ai=debug,tower_http=info`).
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        Error::config(format!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) or target=level directives",
            directives, e
        ))
    })
}

/// Installs the global JSON subscriber.
pub fn init(directives: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives)?)
        .json()
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_levels() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert!(env_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_target_directives() {
        assert!(env_filter("porchest_ai=debug,tower_http=info").is_ok());
        assert!(env_filter("warn,porchest_ai::server=trace").is_ok());
    }

    #[test]
    fn test_invalid_level_in_directive() {
        let err = env_filter("porchest_ai=loudest").unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"), "got: {err}");
    }
}
