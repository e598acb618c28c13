mod common;

use axum::http::StatusCode;
use bom_inventory_api::entities::{
    order::Entity as OrderEntity,
    product_part_association::{self, Entity as AssociationEntity},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn product_create_list_replace_delete() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post(
            "/api/products/",
            json!({ "name": "Widget A", "description": "A widget" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Widget A");
    let id = created["product_id"].as_i64().unwrap();

    let (status, listed) = app.get("/api/products/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, replaced) = app
        .put(
            &format!("/api/products/{id}"),
            json!({ "name": "Widget B", "description": "Renamed" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        replaced,
        json!({ "product_id": id, "name": "Widget B", "description": "Renamed" })
    );

    let (status, body) = app.delete(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("product of id {id} deleted successfully")
    );

    let (_, listed) = app.get("/api/products").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn collection_routes_accept_both_slash_forms() {
    let app = TestApp::new().await;

    for uri in ["/api/orders", "/api/orders/", "/api/parts", "/api/ppa/"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn explicit_ids_are_kept_and_duplicates_conflict() {
    let app = TestApp::new().await;

    let payload = json!({ "part_id": 42, "part_name": "Bolt", "inventory_quantity": 7 });
    let (status, created) = app.post("/api/parts/", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, payload);

    let (status, _) = app.post("/api/parts/", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn generated_ids_follow_explicit_ones() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/products/",
            json!({ "product_id": 1, "name": "First", "description": "explicit" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post("/api/products/", json!({ "name": "Second", "description": "generated" }))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["product_id"], 2);
}

#[tokio::test]
async fn long_product_names_are_stored() {
    let app = TestApp::new().await;
    let name = "n".repeat(600);

    let (status, body) = app
        .post("/api/products/", json!({ "name": name, "description": "long" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
async fn order_round_trip_preserves_fields() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Gadget").await;

    let (status, order) = app
        .post(
            "/api/orders/",
            json!({
                "product_id": product_id,
                "quantity": 3,
                "order_date": "2024-05-01T12:00:00Z",
                "status": "pending"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["quantity"], 3);
    assert_eq!(order["status"], "pending");
    assert!(order["order_date"].as_str().unwrap().starts_with("2024-05-01T12:00:00"));

    let id = order["order_id"].as_i64().unwrap();
    let (status, replaced) = app
        .put(
            &format!("/api/orders/{id}"),
            json!({ "product_id": product_id, "quantity": 5, "status": "shipped" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["status"], "shipped");
    assert_eq!(replaced["order_date"], serde_json::Value::Null);
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .put(
            "/api/orders/999",
            json!({ "product_id": 1, "quantity": 1, "status": "new" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "order of 999 not found");

    let (status, body) = app.delete("/api/parts/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "part of 999 not found");

    let (status, body) = app.delete("/api/ppa/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "PPA of 5 not found");

    let (_, orders) = app.get("/api/orders/").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn non_numeric_ids_are_validation_errors() {
    let app = TestApp::new().await;

    let (status, body) = app.delete("/api/orders/abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");
    assert!(body["timestamp"].is_string());

    let (status, _) = app
        .put(
            "/api/parts/1.5",
            json!({ "part_name": "Nut", "inventory_quantity": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    for uri in ["/api/products/x", "/api/ppa/%20"] {
        let (status, _) = app.delete(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn invalid_payloads_are_rejected() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Gadget").await;

    let (status, body) = app
        .post(
            "/api/orders/",
            json!({ "product_id": product_id, "quantity": 0, "status": "new" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unprocessable Entity");

    let (status, _) = app
        .post("/api/products/", json!({ "name": "   ", "description": "x" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .post(
            "/api/parts/",
            json!({ "part_name": "p".repeat(1001), "inventory_quantity": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.post("/api/parts/", json!({ "inventory_quantity": 1 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, orders) = app.get("/api/orders/").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn replace_rejects_conflicting_body_id() {
    let app = TestApp::new().await;
    let part_id = app.seed_part("Nut", 1).await;

    let (status, _) = app
        .put(
            &format!("/api/parts/{part_id}"),
            json!({ "part_id": part_id + 1, "part_name": "Nut", "inventory_quantity": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn dangling_references_are_referential_errors() {
    let app = TestApp::new().await;
    let part_id = app.seed_part("Nut", 1).await;

    let (status, _) = app
        .post(
            "/api/ppa/",
            json!({ "product_id": 404, "part_id": part_id, "quantity": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/orders/",
            json!({ "product_id": 404, "quantity": 1, "status": "new" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_a_part_cascades_to_associations() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Widget").await;
    let bolt = app.seed_part("Bolt", 10).await;
    let nut = app.seed_part("Nut", 10).await;
    app.seed_association(product_id, bolt, 2).await;
    app.seed_association(product_id, nut, 1).await;

    let (status, _) = app.delete(&format!("/api/parts/{bolt}")).await;
    assert_eq!(status, StatusCode::OK);

    let remaining = AssociationEntity::find()
        .all(&*app.state.db)
        .await
        .expect("query associations");
    assert_eq!(remaining.len(), 1);
    assert_eq!(i64::from(remaining[0].part_id), nut);
}

#[tokio::test]
async fn deleting_a_product_cascades_to_associations_and_orders() {
    let app = TestApp::new().await;
    let product_id = app.seed_product("Widget").await;
    let bolt = app.seed_part("Bolt", 10).await;
    app.seed_association(product_id, bolt, 2).await;
    let (status, _) = app
        .post(
            "/api/orders/",
            json!({ "product_id": product_id, "quantity": 1, "status": "new" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&format!("/api/products/{product_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("product of id {product_id} deleted successfully")
    );

    let db = &*app.state.db;
    let lines = AssociationEntity::find()
        .filter(product_part_association::Column::ProductId.eq(product_id as i32))
        .count(db)
        .await
        .unwrap();
    assert_eq!(lines, 0);
    assert_eq!(OrderEntity::find().count(db).await.unwrap(), 0);

    let (_, parts) = app.get("/api/parts/").await;
    assert_eq!(parts.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "up");

    let (status, doc) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/ppa/{id}"].is_object());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app
        .request(axum::http::Method::DELETE, "/api/orders/1", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap()
        .to_string();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["request_id"], header);
}
