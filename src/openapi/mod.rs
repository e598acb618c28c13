use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BOM Inventory API",
        version = "0.1.0",
        description = r#"
# Parts & BOM Inventory API

CRUD over orders, products, parts and product-part associations, plus
bill-of-materials queries that compute the parts a product needs.

## Bill of materials

- `GET /api/product/{name}/parts` lists each part of a product with its
  current inventory.
- `GET /api/product/{name}/{multiplier}/parts` scales every line by
  `multiplier` and checks inventory.

Product names are matched ignoring case and whitespace. An unknown product,
a missing part or short inventory is answered with `200` and a `message`.

## Errors

Id-addressed and validating endpoints report failures as:

```json
{
  "error": "Not Found",
  "message": "order of 42 not found",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development")
    ),
    tags(
        (name = "orders", description = "Order management endpoints"),
        (name = "parts", description = "Part and inventory endpoints"),
        (name = "products", description = "Product catalog endpoints"),
        (name = "associations", description = "Product-part association endpoints"),
        (name = "bom", description = "Bill-of-materials queries"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::orders::list_orders,
        crate::handlers::orders::create_order,
        crate::handlers::orders::update_order,
        crate::handlers::orders::delete_order,

        crate::handlers::parts::list_parts,
        crate::handlers::parts::create_part,
        crate::handlers::parts::update_part,
        crate::handlers::parts::delete_part,

        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,

        crate::handlers::associations::list_associations,
        crate::handlers::associations::create_association,
        crate::handlers::associations::update_association,
        crate::handlers::associations::delete_association,

        crate::handlers::bom::scaled_parts,
        crate::handlers::bom::product_parts,

        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::entities::order::Model,
            crate::entities::part::Model,
            crate::entities::product::Model,
            crate::entities::product_part_association::Model,

            crate::dto::OrderPayload,
            crate::dto::PartPayload,
            crate::dto::ProductPayload,
            crate::dto::ProductPartAssociationPayload,

            crate::dto::BomRequirementsResponse,
            crate::dto::BomInventoryResponse,
            crate::dto::RequiredPartLine,
            crate::dto::InventoryPartLine,
            crate::dto::MessageResponse,

            crate::handlers::health::HealthResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
