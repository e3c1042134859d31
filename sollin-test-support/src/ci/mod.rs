//! Environment-driven tuning shared by the workspace's test suites.

pub mod property_test_profile;
