//! # 产品 GraphQL 服务
//!
//! 通过单一 GraphQL 端点对内存中的产品数据进行增删改查：
//! - `app`: 应用层（产品模型、存储服务、GraphQL schema 与 HTTP 处理器）
//! - `core`: 核心层（查询执行、中间件、错误处理）
//! - `infrastructure`: 基础设施层（配置、日志）

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::build_app;
pub use crate::app::product::model::Product;
pub use crate::app::product::schema::{build_schema, ProductSchema};
pub use crate::app::product::service::ProductService;
pub use crate::core::error::{CoreError, Result};
pub use crate::infrastructure::config::Config;
