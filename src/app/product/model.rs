//! 产品数据模型

use async_graphql::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
    pub price: f64,
}

// 字段在 schema 中均为可空类型
#[Object]
impl Product {
    async fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    async fn info(&self) -> Option<&str> {
        Some(&self.info)
    }

    async fn price(&self) -> Option<f64> {
        Some(self.price)
    }
}

/// `create` 变更绑定后的参数
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub info: String,
    pub price: f64,
}

/// `update` 变更绑定后的参数，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub info: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(info) = self.info {
            product.info = info;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
