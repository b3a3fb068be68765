use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header carrying the correlation id on every outbound request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
const TIMESTAMP_PREFIX: &str = "req-";

/// How correlation ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RequestIdStrategy {
    #[default]
    Uuid,
    Timestamp,
}

impl RequestIdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestIdStrategy::Uuid => "uuid",
            RequestIdStrategy::Timestamp => "timestamp",
        }
    }
}

/// Opaque correlation id sent as `x-request-id`. Never interpreted locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate(strategy: RequestIdStrategy) -> Self {
        match strategy {
            RequestIdStrategy::Uuid => Self(Uuid::new_v4().to_string()),
            RequestIdStrategy::Timestamp => {
                Self(format!("{}{}", TIMESTAMP_PREFIX, current_timestamp_millis()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn current_timestamp_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique_and_parse() {
        let a = RequestId::generate(RequestIdStrategy::Uuid);
        let b = RequestId::generate(RequestIdStrategy::Uuid);
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn timestamp_ids_carry_prefix() {
        let id = RequestId::generate(RequestIdStrategy::Timestamp);
        let millis = id.as_str().strip_prefix("req-").expect("prefix");
        assert!(millis.parse::<u128>().unwrap() > 0);
    }

    #[test]
    fn strategy_values_parse_strictly() {
        assert_eq!(
            RequestIdStrategy::from_str("timestamp", true),
            Ok(RequestIdStrategy::Timestamp)
        );
        assert_eq!(RequestIdStrategy::from_str("uuid", false), Ok(RequestIdStrategy::Uuid));
        assert!(RequestIdStrategy::from_str("bogus", true).is_err());
    }

    #[test]
    fn strategy_names_match_cli_values() {
        for strategy in RequestIdStrategy::value_variants() {
            let value = strategy.to_possible_value().expect("visible");
            assert_eq!(value.get_name(), strategy.as_str());
        }
    }
}
