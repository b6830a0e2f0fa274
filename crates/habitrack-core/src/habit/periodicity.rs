use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Required completion cadence of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Daily,
    Weekly,
}

impl Periodicity {
    pub const ALL: [Periodicity; 2] = [Periodicity::Daily, Periodicity::Weekly];

    /// Distance between two consecutive qualifying periods.
    pub fn interval(&self) -> Duration {
        match self {
            Periodicity::Daily => Duration::days(1),
            Periodicity::Weekly => Duration::days(7),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// Unit used when printing a streak of this cadence.
    pub fn unit(&self, count: u32) -> &'static str {
        match (self, count) {
            (Periodicity::Daily, 1) => "day",
            (Periodicity::Daily, _) => "days",
            (Periodicity::Weekly, 1) => "week",
            (Periodicity::Weekly, _) => "weeks",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(ValidationError::UnknownPeriodicity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("daily".parse::<Periodicity>(), Ok(Periodicity::Daily));
        assert_eq!("Weekly".parse::<Periodicity>(), Ok(Periodicity::Weekly));
        assert_eq!(" DAILY ".parse::<Periodicity>(), Ok(Periodicity::Daily));
    }

    #[test]
    fn rejects_unknown_cadence() {
        assert_eq!(
            "monthly".parse::<Periodicity>(),
            Err(ValidationError::UnknownPeriodicity("monthly".to_string()))
        );
    }

    #[test]
    fn intervals() {
        assert_eq!(Periodicity::Daily.interval(), Duration::days(1));
        assert_eq!(Periodicity::Weekly.interval(), Duration::days(7));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Periodicity::Weekly).unwrap(),
            "\"weekly\""
        );
        let parsed: Periodicity = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(parsed, Periodicity::Daily);
        assert!(serde_json::from_str::<Periodicity>("\"Daily\"").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for p in Periodicity::ALL {
            assert_eq!(p.to_string().parse::<Periodicity>(), Ok(p));
        }
    }
}
