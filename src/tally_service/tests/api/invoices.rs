use chrono::Utc;
use tally_application::DeletePolicy;
use tally_core::{InvoiceId, InvoiceStore};

use crate::helpers::TestApp;

const LISTING: &str = "/dashboard/invoices";

#[tokio::test]
async fn create_stores_cents_and_redirects_to_the_listing() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            LISTING,
            &[
                ("customerId", "cust-1"),
                ("amount", "49.99"),
                ("status", "pending"),
            ],
        )
        .await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], LISTING);

    let invoices = app.invoice_store.fetch_invoices().await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].customer_id.as_str(), "cust-1");
    assert_eq!(invoices[0].amount.cents(), 4999);
    assert_eq!(invoices[0].status.as_str(), "pending");
    assert_eq!(invoices[0].date, Utc::now().date_naive());
}

#[tokio::test]
async fn create_with_missing_fields_returns_form_state() {
    let app = TestApp::new().await;

    let response = app.post_form(LISTING, &[("amount", "0")]).await;

    assert_eq!(response.status().as_u16(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "errors": {
                "amount": ["Amount must be greater than $0."],
                "customerId": ["Please select a customer."],
                "status": ["Please select a status."],
            },
            "message": "Missing Fields. Failed to Create Invoice.",
        })
    );
    assert!(app.invoice_store.fetch_invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_recomputed_after_a_mutation() {
    let app = TestApp::new().await;

    let before: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();
    assert!(before.is_empty());

    app.post_form(
        LISTING,
        &[("customerId", "cust-1"), ("amount", "10"), ("status", "paid")],
    )
    .await;

    let after: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0]["amount"], 1000);
    assert_eq!(after[0]["status"], "paid");
}

#[tokio::test]
async fn listing_is_served_from_cache_until_invalidated() {
    let app = TestApp::new().await;

    let _: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();

    // Written behind the service's back: no invalidation happens.
    app.invoice_store
        .insert_invoice(&tally_core::NewInvoice {
            draft: tally_core::InvoiceForm {
                customer_id: Some("cust-9".to_owned()),
                amount: Some("1".to_owned()),
                status: Some("paid".to_owned()),
            }
            .validate_strict()
            .unwrap(),
            date: Utc::now().date_naive(),
        })
        .await
        .unwrap();

    let cached: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();
    assert!(cached.is_empty());
}

#[tokio::test]
async fn update_rewrites_fields_and_redirects() {
    let app = TestApp::new().await;
    app.post_form(
        LISTING,
        &[("customerId", "cust-1"), ("amount", "10"), ("status", "pending")],
    )
    .await;
    let id = app.invoice_store.fetch_invoices().await.unwrap()[0].id;

    let response = app
        .post_form(
            &format!("{LISTING}/{id}/edit"),
            &[("customerId", "cust-2"), ("amount", "12.34"), ("status", "paid")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 303);
    let invoice = &app.invoice_store.fetch_invoices().await.unwrap()[0];
    assert_eq!(invoice.customer_id.as_str(), "cust-2");
    assert_eq!(invoice.amount.cents(), 1234);
    assert_eq!(invoice.status.as_str(), "paid");
}

#[tokio::test]
async fn update_of_unknown_id_is_still_a_success() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            &format!("{LISTING}/{}/edit", InvoiceId::new()),
            &[("customerId", "cust-2"), ("amount", "1"), ("status", "paid")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 303);
}

#[tokio::test]
async fn update_reports_only_the_first_invalid_field() {
    let app = TestApp::new().await;

    let response = app
        .post_form(&format!("{LISTING}/{}/edit", InvoiceId::new()), &[])
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["errors"],
        serde_json::json!({ "customerId": ["Please select a customer."] })
    );
    assert_eq!(body["message"], "Missing Fields. Failed to Update Invoice.");
}

#[tokio::test]
async fn delete_always_fails_and_keeps_the_invoice() {
    let app = TestApp::new().await;
    app.post_form(
        LISTING,
        &[("customerId", "cust-1"), ("amount", "10"), ("status", "pending")],
    )
    .await;
    let id = app.invoice_store.fetch_invoices().await.unwrap()[0].id;

    let response = app.post_form(&format!("{LISTING}/{id}/delete"), &[]).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to Delete Invoice");
    assert_eq!(app.invoice_store.fetch_invoices().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_fails_the_same_way_for_a_malformed_id() {
    let app = TestApp::new().await;

    for id in ["abc", "123", "not-a-uuid"] {
        let response = app.post_form(&format!("{LISTING}/{id}/delete"), &[]).await;

        assert_eq!(response.status().as_u16(), 500, "Failed for id: {id}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to Delete Invoice" }));
    }
}

#[tokio::test]
async fn enabled_delete_removes_the_invoice() {
    let app = TestApp::with_delete_policy(DeletePolicy::Enabled).await;
    app.post_form(
        LISTING,
        &[("customerId", "cust-1"), ("amount", "10"), ("status", "pending")],
    )
    .await;
    let id = app.invoice_store.fetch_invoices().await.unwrap()[0].id;

    let response = app.post_form(&format!("{LISTING}/{id}/delete"), &[]).await;

    assert_eq!(response.status().as_u16(), 303);
    assert!(app.invoice_store.fetch_invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_invoice_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            &format!("{LISTING}/not-a-uuid/edit"),
            &[("customerId", "cust-2"), ("amount", "1"), ("status", "paid")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn nested_listing_is_recomputed_after_a_mutation() {
    let app = TestApp::nested_under("/app").await;

    let before: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();
    assert!(before.is_empty());

    let response = app
        .post_form(
            LISTING,
            &[("customerId", "cust-1"), ("amount", "10"), ("status", "paid")],
        )
        .await;
    assert_eq!(response.status().as_u16(), 303);

    let after: Vec<serde_json::Value> = app.get(LISTING).await.json().await.unwrap();
    assert_eq!(after.len(), 1);
}
