//! Locale and message provider tests.
