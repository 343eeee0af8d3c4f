//! Vercel live-API integration tests.
//!
//! Run with:
//! ```bash
//! VERCEL_API_TOKEN=xxx TEST_DOMAIN=example.com \
//!     cargo test --test vercel_live_test -- --ignored --nocapture --test-threads=1
//! ```
//! Team-owned zones additionally need `VERCEL_TEAM_ID=team_xxx`.

mod common;

use common::{TestContext, generate_test_record_name};
use vercel_dns_provider::{DnsProvider, Record, RecordType};

#[tokio::test]
#[ignore = "integration test: requires VERCEL_API_TOKEN and TEST_DOMAIN"]
async fn test_vercel_validate_credentials() {
    skip_if_no_credentials!("VERCEL_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::vercel(), "failed to build test context");
    let valid = require_ok!(
        ctx.provider.validate_credentials().await,
        "validate_credentials call failed"
    );
    assert!(valid, "credentials should be accepted");

    println!("✓ validate_credentials passed");
}

#[tokio::test]
#[ignore = "integration test: requires VERCEL_API_TOKEN and TEST_DOMAIN"]
async fn test_vercel_get_records() {
    skip_if_no_credentials!("VERCEL_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::vercel(), "failed to build test context");
    let records = require_ok!(
        ctx.provider.get_records(&ctx.zone).await,
        "get_records call failed"
    );

    println!("✓ get_records passed, {} records in zone", records.len());
}

#[tokio::test]
#[ignore = "integration test: requires VERCEL_API_TOKEN and TEST_DOMAIN"]
async fn test_vercel_append_list_delete_cycle() {
    skip_if_no_credentials!("VERCEL_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::vercel(), "failed to build test context");
    let name = generate_test_record_name();
    let record = Record::new(&name, RecordType::Txt, "integration-test", 60);

    let created = require_ok!(
        ctx.provider.append_records(&ctx.zone, &[record.clone()]).await,
        "append_records call failed"
    );
    assert_eq!(created.len(), 1);
    assert!(!created[0].id.is_empty(), "created record should carry an id");

    let listed = require_ok!(
        ctx.provider.get_records(&ctx.zone).await,
        "get_records call failed"
    );
    assert!(
        listed.iter().any(|r| r.name == name && r.value == "integration-test"),
        "appended record should be listed"
    );

    let deleted = require_ok!(
        ctx.provider.delete_records(&ctx.zone, &[record.clone()]).await,
        "delete_records call failed"
    );
    assert_eq!(deleted.len(), 1);

    // Idempotence: deleting again is a no-op, not an error.
    require_ok!(
        ctx.provider.delete_records(&ctx.zone, &[record]).await,
        "second delete_records call failed"
    );

    println!("✓ append/list/delete cycle passed for {name}");
}

#[tokio::test]
#[ignore = "integration test: requires VERCEL_API_TOKEN and TEST_DOMAIN"]
async fn test_vercel_set_updates_in_place() {
    skip_if_no_credentials!("VERCEL_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::vercel(), "failed to build test context");
    let name = generate_test_record_name();
    let record = Record::new(&name, RecordType::Txt, "set-test", 60);

    // First set creates.
    let created = require_ok!(
        ctx.provider.set_records(&ctx.zone, &[record.clone()]).await,
        "first set_records call failed"
    );
    assert!(!created[0].id.is_empty());

    // Second set with a new TTL updates the same record.
    let updated = require_ok!(
        ctx.provider
            .set_records(&ctx.zone, &[Record { ttl: 120, ..record.clone() }])
            .await,
        "second set_records call failed"
    );
    assert_eq!(
        updated[0].id, created[0].id,
        "update should keep the record id"
    );

    let _ = ctx.provider.delete_records(&ctx.zone, &[record]).await;

    println!("✓ set update-in-place passed for {name}");
}
