//! Shared test utilities for `smallring-core`.

use proptest::test_runner::Config as ProptestConfig;
use smallring_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds the proptest configuration for one property suite.
///
/// `PROPTEST_CASES` and `SMALLRING_PBT_FORK` override the defaults the same
/// way for every suite in the crate.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
