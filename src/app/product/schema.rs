//! 产品 GraphQL schema 及解析器
//!
//! 参数由引擎按声明类型完成转换，解析器再组装成 `NewProduct` / `ProductPatch`
//! 交给 [`ProductService`]。

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

use super::model::{NewProduct, Product, ProductPatch};
use super::service::ProductService;
use crate::infrastructure::config::GraphqlConfig;

pub type ProductSchema = Schema<Query, Mutation, EmptySubscription>;

/// 构建 schema，产品存储作为上下文数据注入
pub fn build_schema(service: ProductService, config: &GraphqlConfig) -> ProductSchema {
    let mut builder = Schema::build(Query, Mutation, EmptySubscription).data(service);
    if let Some(depth) = config.depth_limit {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = config.complexity_limit {
        builder = builder.limit_complexity(complexity);
    }
    builder.finish()
}

pub struct Query;

#[Object]
impl Query {
    /// Get product by id
    async fn product(&self, ctx: &Context<'_>, id: Option<i64>) -> Result<Option<Product>> {
        let service = ctx.data::<ProductService>()?;
        Ok(id.and_then(|id| service.get_product(id)))
    }

    /// Get product list
    async fn list(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Product>>>> {
        let products = ctx.data::<ProductService>()?.list_products();
        Ok(Some(products.into_iter().map(Some).collect()))
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create new product
    async fn create(
        &self,
        ctx: &Context<'_>,
        name: String,
        info: Option<String>,
        price: f64,
    ) -> Result<Option<Product>> {
        let new = NewProduct {
            name,
            info: info.unwrap_or_default(),
            price,
        };
        Ok(Some(ctx.data::<ProductService>()?.create_product(new)))
    }

    /// Update product by id
    async fn update(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: Option<String>,
        info: Option<String>,
        price: Option<f64>,
    ) -> Result<Option<Product>> {
        let patch = ProductPatch { name, info, price };
        Ok(Some(ctx.data::<ProductService>()?.update_product(id, patch)))
    }

    /// Delete product by id
    async fn delete(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Product>> {
        Ok(Some(ctx.data::<ProductService>()?.delete_product(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> (ProductSchema, ProductService) {
        let service = ProductService::seeded();
        (build_schema(service.clone(), &GraphqlConfig::default()), service)
    }

    async fn run(schema: &ProductSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_product_by_id() {
        let (schema, _) = schema();
        let data = run(&schema, "{ product(id: 2) { id name info } }").await;
        assert_eq!(
            data,
            json!({"product": {"id": 2, "name": "product 2", "info": "product2 description"}})
        );
    }

    #[tokio::test]
    async fn test_product_missing_or_without_id_is_null() {
        let (schema, _) = schema();
        let data = run(&schema, "{ a: product(id: 99) { id } b: product { id } }").await;
        assert_eq!(data, json!({"a": null, "b": null}));
    }

    #[tokio::test]
    async fn test_create_without_info_stores_empty_text() {
        let (schema, service) = schema();
        let data = run(&schema, r#"mutation { create(name: "X", price: 3.5) { name info } }"#).await;
        assert_eq!(data, json!({"create": {"name": "X", "info": ""}}));
        assert_eq!(service.len(), 4);
    }

    #[tokio::test]
    async fn test_update_missing_returns_zero_valued_record() {
        let (schema, _) = schema();
        let data = run(&schema, "mutation { update(id: 404, price: 1.0) { id name info } }").await;
        assert_eq!(data, json!({"update": {"id": 0, "name": "", "info": ""}}));
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_reported() {
        let (schema, service) = schema();
        let response = schema.execute(r#"mutation { create(name: "X") { id } }"#).await;
        assert!(!response.errors.is_empty());
        assert_eq!(service.len(), 3);
    }

    #[tokio::test]
    async fn test_output_types_are_nullable() {
        let (schema, _) = schema();
        let data = run(
            &schema,
            r#"{
                product: __type(name: "Product") { fields { name type { kind name } } }
                query: __type(name: "Query") { fields { name type { kind ofType { kind } } } }
                mutation: __type(name: "Mutation") { fields { name type { kind name } } }
            }"#,
        )
        .await;

        assert_eq!(
            data["product"]["fields"],
            json!([
                {"name": "id", "type": {"kind": "SCALAR", "name": "Int"}},
                {"name": "name", "type": {"kind": "SCALAR", "name": "String"}},
                {"name": "info", "type": {"kind": "SCALAR", "name": "String"}},
                {"name": "price", "type": {"kind": "SCALAR", "name": "Float"}}
            ])
        );
        assert_eq!(
            data["query"]["fields"],
            json!([
                {"name": "product", "type": {"kind": "OBJECT", "ofType": null}},
                {"name": "list", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT"}}}
            ])
        );
        for field in data["mutation"]["fields"].as_array().unwrap() {
            assert_eq!(field["type"], json!({"kind": "OBJECT", "name": "Product"}));
        }
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let config = GraphqlConfig {
            depth_limit: Some(1),
            complexity_limit: None,
        };
        let schema = build_schema(ProductService::seeded(), &config);
        let response = schema.execute("{ list { id } }").await;
        assert!(!response.errors.is_empty());
    }
}
