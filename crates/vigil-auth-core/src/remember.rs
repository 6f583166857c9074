//! Remember-me requests and the pending-request policy
//!
//! A caller arms the guard with a [`RememberMe`] request before login; the
//! guard consumes it exactly once per login call through
//! [`RememberPolicy::take_and_reset`].

use std::str::FromStr;
use std::time::Duration;

/// How long a login should be remembered across requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RememberMe {
    /// Issue no remember token
    #[default]
    Never,
    /// Remember with the guard's default lifetime
    Default,
    /// Remember for an explicit span
    For(Duration),
}

impl RememberMe {
    /// Resolve to a concrete lifetime against a guard default
    pub fn duration(self, default: Duration) -> Option<Duration> {
        match self {
            Self::Never => None,
            Self::Default => Some(default),
            Self::For(span) => Some(span),
        }
    }
}

impl From<bool> for RememberMe {
    fn from(remember: bool) -> Self {
        if remember {
            Self::Default
        } else {
            Self::Never
        }
    }
}

/// Seconds. `0` means never; `1` is the boolean-style request for the
/// default lifetime; anything larger is an explicit span.
impl From<u64> for RememberMe {
    fn from(seconds: u64) -> Self {
        match seconds {
            0 => Self::Never,
            1 => Self::Default,
            n => Self::For(Duration::from_secs(n)),
        }
    }
}

impl From<Duration> for RememberMe {
    fn from(span: Duration) -> Self {
        if span.is_zero() {
            Self::Never
        } else {
            Self::For(span)
        }
    }
}

impl FromStr for RememberMe {
    type Err = SpanParseError;

    /// Accepts a bare number of seconds (with the numeric mapping above) or
    /// a span like `"2 days"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(seconds) = trimmed.parse::<u64>() {
            return Ok(Self::from(seconds));
        }
        parse_span(trimmed).map(Self::from)
    }
}

/// Failure to parse a duration span
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration span {0:?}")]
pub struct SpanParseError(pub String);

/// Parse a span like `"2 days"`, `"90 minutes"`, or `"1 week"`.
///
/// Grammar: `<integer> <unit>`. Months count as 30 days and years as 365
/// days.
pub fn parse_span(s: &str) -> Result<Duration, SpanParseError> {
    let err = || SpanParseError(s.to_string());

    let mut parts = s.split_whitespace();
    let amount: u64 = parts
        .next()
        .ok_or_else(err)?
        .parse()
        .map_err(|_| err())?;
    let unit = parts.next().ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }

    let unit_seconds = match unit.to_ascii_lowercase().as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => 60 * 60,
        "d" | "day" | "days" => 24 * 60 * 60,
        "w" | "week" | "weeks" => 7 * 24 * 60 * 60,
        "month" | "months" => 30 * 24 * 60 * 60,
        "y" | "year" | "years" => 365 * 24 * 60 * 60,
        _ => return Err(err()),
    };

    amount
        .checked_mul(unit_seconds)
        .map(Duration::from_secs)
        .ok_or_else(err)
}

/// Pending remember request, consumed exactly once per login.
///
/// Setting overwrites any pending value; taking clears unconditionally,
/// so a stale request can never leak into a later login.
#[derive(Debug, Default)]
pub struct RememberPolicy {
    pending: RememberMe,
}

impl RememberPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the next login with a remember request
    pub fn set(&mut self, request: RememberMe) {
        self.pending = request;
    }

    /// Read and clear the pending request
    pub fn take_and_reset(&mut self) -> RememberMe {
        std::mem::take(&mut self.pending)
    }

    /// The pending request, without consuming it
    pub fn pending(&self) -> RememberMe {
        self.pending
    }
}
