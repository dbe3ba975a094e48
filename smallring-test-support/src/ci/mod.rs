//! Helpers that read CI-facing knobs shared by every smallring test suite.

pub mod property_test_profile;
