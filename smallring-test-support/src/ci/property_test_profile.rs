//! Property-test run profile shared by the smallring suites.
//!
//! CI raises case counts and enables forking through environment variables;
//! local runs fall back to the defaults each suite passes in.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const SMALLRING_PBT_FORK_ENV_KEY: &str = "SMALLRING_PBT_FORK";

/// Case count and fork policy for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, keeping `default_cases` and
    /// `default_fork` when a variable is unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallring_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: Override::new(PROPTEST_CASES_ENV_KEY, parse_cases).or(default_cases),
            fork: Override::new(SMALLRING_PBT_FORK_ENV_KEY, parse_flag).or(default_fork),
        }
    }

    /// Number of cases each property runs.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

struct Override<F> {
    key: &'static str,
    parse: F,
}

impl<F> Override<F> {
    fn new(key: &'static str, parse: F) -> Self {
        Self { key, parse }
    }

    fn or<T>(self, default: T) -> T
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let Ok(raw) = env::var(self.key) else {
            return default;
        };
        (self.parse)(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                env = self.key,
                raw = %raw,
                reason = %reason,
                "ignoring malformed property-test override",
            );
            default
        })
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean flag")),
    }
}
