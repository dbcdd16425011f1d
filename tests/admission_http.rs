//! Integration tests for the admission and check-in history endpoints.
//!
//! The plain-text operator messages are a contract with the scanner
//! frontend and are asserted verbatim.

mod common;

use axum::http::StatusCode;
use common::{get, post, test_app};

use entree::domain::foundation::Timestamp;
use entree::domain::pass::{Pass, PassKind};
use entree::ports::{CheckInLedger, PassRegistry, UserDirectory};

#[tokio::test]
async fn unknown_pass_id_is_an_invalid_qr_code() {
    let app = test_app();
    let id = entree::domain::foundation::PassId::new();

    let (status, body) = get(&app, &format!("/tickets/verify/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Mislukt - Ongeldige QR code");
}

#[tokio::test]
async fn garbage_pass_id_is_an_invalid_qr_code() {
    let app = test_app();

    let (status, body) = get(&app, "/tickets/verify/not-a-pass").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Mislukt - Ongeldige QR code");
}

#[tokio::test]
async fn valid_pass_checks_the_owner_in() {
    let app = test_app();
    let owner = app.directory.add_new_owner("Anna", "anna@example.com");
    let pass = Pass::issue(owner, PassKind::Annual, "photo");
    app.registry.insert(&pass).await.unwrap();

    let (status, body) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Inchecken gelukt");

    let (_, total) = get(&app, "/occupancy/total").await;
    assert_eq!(total, "1");

    let (_, again) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
    assert_eq!(again, "Mislukt - Gebruiker is al ingecheckt");
}

#[tokio::test]
async fn pass_without_directory_owner_is_rejected() {
    let app = test_app();
    let pass = Pass::issue(
        entree::domain::foundation::OwnerId::new(),
        PassKind::Annual,
        "photo",
    );
    app.registry.insert(&pass).await.unwrap();

    let (_, body) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
    assert_eq!(body, "Mislukt - Gebruiker niet gevonden");
}

#[tokio::test]
async fn expired_annual_pass_reports_its_end_date() {
    let app = test_app();
    let owner = app.directory.add_new_owner("Anna", "anna@example.com");
    let start = Timestamp::now().add_days(-500);
    let end = start.add_years(1);
    let pass = Pass::new(owner, PassKind::Annual, start, end, "photo").unwrap();
    app.registry.insert(&pass).await.unwrap();

    let expected = format!("Mislukt - Ticket is verlopen op {}", end.format_nl());
    for _ in 0..2 {
        let (_, body) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn used_single_use_pass_reports_when_it_was_used() {
    let app = test_app();
    let owner = app.directory.add_new_owner("Anna", "anna@example.com");
    let pass = Pass::issue(owner, PassKind::SingleUse, "photo");
    app.registry.insert(&pass).await.unwrap();

    let (_, first) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
    assert_eq!(first, "Inchecken gelukt");

    let used_at = app
        .registry
        .find(&pass.id)
        .await
        .unwrap()
        .unwrap()
        .valid_until;

    // Owner leaves; the pass itself stays burned.
    app.directory.check_out_all().await.unwrap();

    let (_, second) = get(&app, &format!("/tickets/verify/{}", pass.id)).await;
    assert_eq!(
        second,
        format!("Mislukt - Ticket is al gebruikt op {}", used_at.format_nl())
    );
}

#[tokio::test]
async fn history_shows_admissions_until_cleared() {
    let app = test_app();
    let owner = app.directory.add_new_owner("Anna", "anna@example.com");
    let pass = Pass::issue(owner, PassKind::Annual, "photo");
    app.registry.insert(&pass).await.unwrap();

    get(&app, &format!("/tickets/verify/{}", pass.id)).await;

    let (status, body) = get(&app, &format!("/checkins/history/{}", owner)).await;
    assert_eq!(status, StatusCode::OK);
    let records: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);

    let (status, _) = post(&app, &format!("/checkins/clear-history/{}", owner)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(&app, &format!("/checkins/history/{}", owner)).await;
    let records: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(records.as_array().unwrap().is_empty());

    // The ledger still holds the record for aggregate reporting.
    assert_eq!(app.ledger.records_for_owner(&owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn history_of_unknown_owner_is_not_found() {
    let app = test_app();
    let owner = entree::domain::foundation::OwnerId::new();

    let (status, _) = get(&app, &format!("/checkins/history/{}", owner)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
