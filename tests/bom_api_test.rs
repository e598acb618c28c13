mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use common::TestApp;

/// "Widget A" needs two PartX per unit.
async fn widget_app(inventory: i32) -> (TestApp, i64) {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Widget A").await;
    let part_id = app.seed_part("PartX", inventory).await;
    app.seed_association(product_id, part_id, 2).await;
    (app, part_id)
}

#[tokio::test]
async fn scaled_lookup_reports_required_quantities() {
    let (app, part_id) = widget_app(10).await;

    let (status, body) = app.get("/api/product/Widget%20A/1/parts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "product_name": "Widget A",
            "parts_required": [
                { "part_id": part_id, "part_name": "PartX", "quantity": 2 }
            ]
        })
    );
}

#[tokio::test]
async fn names_match_ignoring_case_and_whitespace() {
    let (app, _) = widget_app(10).await;

    let (status, body) = app.get("/api/product/widget%20a%20/3/parts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_name"], "widget a ");
    assert_eq!(body["parts_required"][0]["quantity"], 6);
}

#[tokio::test]
async fn insufficient_inventory_names_the_part() {
    let (app, _) = widget_app(5).await;

    let (status, body) = app.get("/api/product/widget%20a%20/3/parts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Not enough PartX available" }));
}

#[tokio::test]
async fn unscaled_lookup_lists_inventory_without_checking() {
    let (app, part_id) = widget_app(0).await;

    let (status, body) = app.get("/api/product/WidgetA/parts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "product_name": "WidgetA",
            "parts_required": [
                { "part_id": part_id, "part_name": "PartX", "inventory_quantity": 0 }
            ]
        })
    );
}

#[rstest]
#[case("/api/product/Unknown%20Product/parts")]
#[case("/api/product/Unknown%20Product/2/parts")]
#[tokio::test]
async fn unknown_product_is_a_message(#[case] uri: &str) {
    let (app, _) = widget_app(10).await;

    let (status, body) = app.get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Product not found" }));
}

#[tokio::test]
async fn product_without_parts_resolves_empty() {
    let app = TestApp::new().await;
    app.seed_product("Bare").await;

    let (status, body) = app.get("/api/product/bare/4/parts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "product_name": "bare", "parts_required": [] }));
}

#[tokio::test]
async fn parts_follow_association_order() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Gadget").await;
    let nut = app.seed_part("Nut", 100).await;
    let bolt = app.seed_part("Bolt", 100).await;
    app.seed_association(product_id, bolt, 4).await;
    app.seed_association(product_id, nut, 1).await;

    let (_, body) = app.get("/api/product/Gadget/2/parts").await;
    assert_eq!(
        body["parts_required"],
        json!([
            { "part_id": bolt, "part_name": "Bolt", "quantity": 8 },
            { "part_id": nut, "part_name": "Nut", "quantity": 2 }
        ])
    );
}

#[tokio::test]
async fn first_short_part_is_reported() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Gadget").await;
    let bolt = app.seed_part("Bolt", 1).await;
    let nut = app.seed_part("Nut", 0).await;
    app.seed_association(product_id, bolt, 5).await;
    app.seed_association(product_id, nut, 5).await;

    let (_, body) = app.get("/api/product/Gadget/1/parts").await;
    assert_eq!(body, json!({ "message": "Not enough Bolt available" }));
}

#[tokio::test]
async fn replenished_inventory_is_seen_immediately() {
    let (app, part_id) = widget_app(1).await;

    let (_, body) = app.get("/api/product/Widget%20A/1/parts").await;
    assert_eq!(body["message"], "Not enough PartX available");

    let (status, _) = app
        .put(
            &format!("/api/parts/{part_id}"),
            json!({ "part_name": "PartX", "inventory_quantity": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/product/Widget%20A/1/parts").await;
    assert_eq!(body["parts_required"][0]["quantity"], 2);
}

#[rstest]
#[case("0")]
#[case("-1")]
#[case("two")]
#[tokio::test]
async fn non_positive_multipliers_are_rejected(#[case] multiplier: &str) {
    let (app, _) = widget_app(10).await;

    let (status, body) = app
        .get(&format!("/api/product/Widget%20A/{multiplier}/parts"))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");
}
