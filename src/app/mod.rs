//! 应用层

pub mod product;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::Config;
use product::handler::{graphql_handler, AppState};
use product::schema::build_schema;
use product::service::ProductService;

/// 组装路由：唯一的 GraphQL 端点，同时接受 GET 和 POST。
/// 只有配置了 `timeout_seconds` 才启用超时。
pub fn build_app(service: ProductService, config: &Config) -> Router {
    let state = AppState {
        schema: build_schema(service, &config.graphql),
    };

    let mut router = Router::new()
        .route(&config.http.route, get(graphql_handler).post(graphql_handler));

    if let Some(seconds) = config.http.timeout_seconds {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(seconds)));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
