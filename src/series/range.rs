use chrono::Duration;

/// Symbolic lookback window selector. Anything else is rejected at the HTTP
/// layer with a 400 before the series code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    H24,
    D7,
    D30,
}

/// Resolved parameters for one range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    /// Lookback window from "now"
    pub span: Duration,
    /// Below this many real readings the hybrid fill kicks in
    pub min_real_samples: usize,
    /// Desired series length
    pub target_samples: usize,
    /// Spacing between synthesized points
    pub interval: Duration,
}

impl RangeToken {
    /// Parse a range token from a query parameter. `None` means the token is
    /// unrecognized and the request should get a 400.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(Self::H24),
            "7d" => Some(Self::D7),
            "30d" => Some(Self::D30),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H24 => "24h",
            Self::D7 => "7d",
            Self::D30 => "30d",
        }
    }

    /// Fixed lookup table mapping each token to its resolved parameters.
    #[must_use]
    pub fn spec(self) -> RangeSpec {
        match self {
            Self::H24 => RangeSpec {
                span: Duration::hours(24),
                min_real_samples: 12,
                target_samples: 24,
                interval: Duration::hours(1),
            },
            Self::D7 => RangeSpec {
                span: Duration::days(7),
                min_real_samples: 14,
                target_samples: 28,
                interval: Duration::hours(6),
            },
            Self::D30 => RangeSpec {
                span: Duration::days(30),
                min_real_samples: 15,
                target_samples: 30,
                interval: Duration::hours(24),
            },
        }
    }
}

impl std::fmt::Display for RangeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
