use std::{fmt, str::FromStr};

/// Aggregation window Spotify uses for "top items" statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    /// Roughly the last 4 weeks
    ShortTerm,
    /// Roughly the last 6 months
    #[default]
    MediumTerm,
    /// Several years of data
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short_term" => Ok(TimeRange::ShortTerm),
            "medium_term" => Ok(TimeRange::MediumTerm),
            "long_term" => Ok(TimeRange::LongTerm),
            other => Err(format!(
                "Invalid time_range {:?}, expected short_term, medium_term or long_term",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium_term() {
        assert_eq!(TimeRange::default(), TimeRange::MediumTerm);
    }

    #[test]
    fn test_parse_matches_wire_value() {
        for range in [TimeRange::ShortTerm, TimeRange::MediumTerm, TimeRange::LongTerm] {
            assert_eq!(range.as_str().parse::<TimeRange>(), Ok(range));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "forever".parse::<TimeRange>().unwrap_err();
        assert!(err.contains("forever"));
        // Wire values are case sensitive
        assert!("SHORT_TERM".parse::<TimeRange>().is_err());
    }
}
