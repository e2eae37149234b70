//! Integration tests for Ironrail.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB and the api server, then:
//! IRONRAIL_TEST_API_URL=http://127.0.0.1:5000 cargo test -p ironrail-integration-tests
//! ```
//!
//! Tests skip themselves when `IRONRAIL_TEST_API_URL` is unset, so a plain
//! `cargo test` passes without any infrastructure.
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, token, and `/me` behavior
//! - `trains_bookings` - Pass-through CRUD over trains and bookings

/// Shared context for tests that talk to a live server.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context from the environment.
    ///
    /// Returns `None` when `IRONRAIL_TEST_API_URL` is unset, which the
    /// [`require_ctx!`] macro turns into a skipped test.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("IRONRAIL_TEST_API_URL").ok()?;

        Some(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A unique email so repeated test runs never collide on the unique index.
    #[must_use]
    pub fn unique_email(prefix: &str) -> String {
        format!("{prefix}-{}@test.ironrail.dev", uuid::Uuid::new_v4().simple())
    }
}

/// Acquire a [`TestContext`] or skip the current test.
#[macro_export]
macro_rules! require_ctx {
    () => {
        match $crate::TestContext::from_env() {
            Some(ctx) => ctx,
            None => {
                eprintln!("IRONRAIL_TEST_API_URL not set; skipping integration test");
                return;
            }
        }
    };
}
