use std::env;

use tracing_subscriber::EnvFilter;

/// Deployment flavor, selected with the `ENVIRONMENT` variable.
///
/// Anything that is not a production spelling counts as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::parse(env::var("ENVIRONMENT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") || v.eq_ignore_ascii_case("prod") => {
                Environment::Production
            }
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Install the process-wide tracing subscriber.
///
/// Filtering comes from `RUST_LOG` (defaulting to "info"). Production emits
/// newline-delimited JSON; development gets human-readable output.
pub fn setup_logging(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if environment.is_production() {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_spellings_parse_case_insensitively() {
        assert_eq!(
            Environment::parse(Some("production")),
            Environment::Production
        );
        assert_eq!(Environment::parse(Some("PROD")), Environment::Production);
    }

    #[test]
    fn anything_else_falls_back_to_development() {
        assert_eq!(Environment::parse(Some("staging")), Environment::Development);
        assert_eq!(Environment::parse(None), Environment::Development);
        assert!(!Environment::Development.is_production());
    }
}
