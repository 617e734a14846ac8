//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI and
//! developers raise or lower the effort through environment variables
//! without touching the suites.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const ARBOR_PBT_CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";
/// Environment variable toggling forked proptest execution.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Reasons an override value was ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected an unsigned integer, got {raw:?}")]
    NotANumber {
        /// Raw environment value.
        raw: String,
    },
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag was not a recognised boolean.
    #[error("expected true/false, 1/0, yes/no or on/off, got {raw:?}")]
    NotABool {
        /// Raw environment value.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// Invalid overrides are logged at `warn` level and replaced by the
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile using `lookup` in place of the process environment.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            cases: resolve(ARBOR_PBT_CASES_ENV_KEY, &lookup, default_cases, parse_cases),
            fork: resolve(ARBOR_PBT_FORK_ENV_KEY, &lookup, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T: Copy>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
