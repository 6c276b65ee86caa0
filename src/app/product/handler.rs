//! 产品 GraphQL 处理器

use async_graphql::Response;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::schema::ProductSchema;
use crate::core::executor;

#[derive(Clone)]
pub struct AppState {
    pub schema: ProductSchema,
}

/// 查询参数，缺省时按空查询交给引擎处理
#[derive(Debug, Deserialize)]
pub struct GraphqlParams {
    #[serde(default)]
    pub query: String,
}

/// 执行 `query` 参数中的 GraphQL 文档。查询错误写在响应体的 `errors` 中，状态码始终为 200。
pub async fn graphql_handler(
    State(state): State<AppState>,
    Query(params): Query<GraphqlParams>,
) -> Json<Response> {
    Json(executor::execute(&state.schema, &params.query).await)
}
