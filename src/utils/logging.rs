use std::str::FromStr;
use tracing::Level;
use crate::core::domain::{Configuration, Runtime};

pub(crate) fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

// Lambda gets json lines without colors, time or module names since CloudWatch adds the
// ingestion time; local runs get the plain human-readable format.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()));
    match config.runtime {
        Runtime::Lambda => {
            builder
                .with_target(false)
                .with_ansi(false)
                .without_time()
                .json()
                .init();
        }
        Runtime::Local => {
            builder
                .with_target(false)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::parse_level;

    #[tokio::test]
    async fn test_should_parse_level() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::WARN, parse_level(" WARN "));
        assert_eq!(Level::INFO, parse_level("chatty"));
    }
}
