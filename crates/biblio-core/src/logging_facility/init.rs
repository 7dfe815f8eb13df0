//! Logging initialization module

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when neither `RUST_LOG` nor an explicit filter is given
    ///
    /// Development shares the terminal with the menus, so it stays quiet.
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "warn",
            Profile::Production | Profile::Test => "biblio=info,warn",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default filter
///
/// `RUST_LOG` still wins when it is set.
///
/// # Example
///
/// ```
/// use biblio_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    init_with_filter(profile, None);
}

/// Initialize the logging facility
///
/// Only the first call has any effect. Filter precedence: `RUST_LOG`, then
/// `filter`, then the profile default.
///
/// - **Development**: human-readable lines on stderr
/// - **Production**: JSON lines on stderr
/// - **Test**: bare registry; use [`init_test_capture`](super::init_test_capture)
pub fn init_with_filter(profile: Profile, filter: Option<&str>) {
    INIT_ONCE.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| filter.and_then(|f| EnvFilter::try_new(f).ok()))
            .unwrap_or_else(|| EnvFilter::new(profile.default_filter()));

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parsing() {
        assert_eq!("Production".parse::<Profile>(), Ok(Profile::Production));
        assert_eq!(" dev ".parse::<Profile>(), Ok(Profile::Development));
        assert!("verbose".parse::<Profile>().is_err());
    }

    #[test]
    fn test_default_filters_parse() {
        assert_eq!(Profile::Development.default_filter(), "warn");
        assert_eq!(Profile::Production.default_filter(), "biblio=info,warn");
        for profile in [Profile::Development, Profile::Production, Profile::Test] {
            assert!(EnvFilter::try_new(profile.default_filter()).is_ok());
        }
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}
