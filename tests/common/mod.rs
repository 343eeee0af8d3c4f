//! Shared helpers for the live-API integration tests.

#![allow(dead_code)]

use std::env;

use vercel_dns_provider::VercelProvider;

/// Skip the test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Generate a unique record name so concurrent test runs don't collide.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Test context wrapping the provider and the zone under test.
pub struct TestContext {
    pub provider: VercelProvider,
    pub zone: String,
}

impl TestContext {
    /// Build a context from `VERCEL_API_TOKEN`, `TEST_DOMAIN` and the
    /// optional `VERCEL_TEAM_ID`.
    pub fn vercel() -> Option<Self> {
        let api_token = env::var("VERCEL_API_TOKEN").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;

        let mut provider = VercelProvider::new(api_token);
        if let Ok(team_id) = env::var("VERCEL_TEAM_ID") {
            provider = provider.with_team_id(team_id);
        }

        Some(Self { provider, zone })
    }
}
