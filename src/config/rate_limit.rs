//! Classification rules for rate-limited responses.

/// Error codes monday.com uses for budget and rate-limit rejections.
pub const DEFAULT_RATE_LIMIT_ERROR_CODES: &[&str] = &[
    "RATE_LIMIT_EXCEEDED",
    "ComplexityException",
    "COMPLEXITY_BUDGET_EXHAUSTED",
    "DAILY_LIMIT_EXCEEDED",
    "maxConcurrencyExceeded",
    "IP_RATE_LIMIT_EXCEEDED",
];

/// Decides which responses count as rate limited.
///
/// A response is rate limited when its HTTP status is in `status_codes`,
/// or when any entry of its `errors` payload carries a code listed in
/// `error_codes`. Both sets are plain data so callers can match whatever
/// envelope their account actually receives.
///
/// # Example
///
/// ```rust
/// use monday_api::RateLimitPolicy;
///
/// let policy = RateLimitPolicy::default();
/// assert!(policy.is_rate_limited_status(429));
/// assert!(policy.is_rate_limited_code("ComplexityException"));
/// assert!(!policy.is_rate_limited_code("InvalidBoardIdException"));
///
/// let strict = RateLimitPolicy::new(vec![429, 503], vec!["SLOW_DOWN".to_string()]);
/// assert!(strict.is_rate_limited_status(503));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitPolicy {
    status_codes: Vec<u16>,
    error_codes: Vec<String>,
}

impl RateLimitPolicy {
    /// Creates a policy from explicit status and error-code sets.
    #[must_use]
    pub const fn new(status_codes: Vec<u16>, error_codes: Vec<String>) -> Self {
        Self {
            status_codes,
            error_codes,
        }
    }

    /// Returns the HTTP status codes treated as rate limited.
    #[must_use]
    pub fn status_codes(&self) -> &[u16] {
        &self.status_codes
    }

    /// Returns the error codes treated as rate limited.
    #[must_use]
    pub fn error_codes(&self) -> &[String] {
        &self.error_codes
    }

    /// Returns `true` if `status` marks a rate-limited response.
    #[must_use]
    pub fn is_rate_limited_status(&self, status: u16) -> bool {
        self.status_codes.contains(&status)
    }

    /// Returns `true` if `code` marks a rate-limited error entry.
    #[must_use]
    pub fn is_rate_limited_code(&self, code: &str) -> bool {
        self.error_codes.iter().any(|c| c == code)
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            status_codes: vec![429],
            error_codes: DEFAULT_RATE_LIMIT_ERROR_CODES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
