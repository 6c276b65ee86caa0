//! 产品存储服务
//!
//! 进程内唯一的产品记录集合。所有访问都经过同一把读写锁：查询持有读锁，
//! 变更在整个"查找并修改"过程中持有写锁。

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use tracing::debug;

use super::model::{NewProduct, Product, ProductPatch};

/// 随机 ID 的取值上界（不含）
pub const ID_UPPER_BOUND: i64 = 100_000;

#[derive(Clone, Default)]
pub struct ProductService {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// 启动时的三条示例数据
    pub fn seeded() -> Self {
        Self::with_products(vec![
            Product {
                id: 1,
                name: "product 1".to_string(),
                info: "product1 description".to_string(),
                price: 700.0,
            },
            Product {
                id: 2,
                name: "product 2".to_string(),
                info: "product2 description".to_string(),
                price: 632.0,
            },
            Product {
                id: 3,
                name: "product 3".to_string(),
                info: "product3 description".to_string(),
                price: 80.0,
            },
        ])
    }

    // 锁中毒时数据仍是完整的 Vec，直接取回继续使用
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 按 ID 查找第一条匹配的产品
    pub fn get_product(&self, id: i64) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// 当前全部产品的快照，保持插入顺序
    pub fn list_products(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// 新建产品。ID 在 `[0, ID_UPPER_BOUND)` 中随机生成，不保证唯一。
    pub fn create_product(&self, new: NewProduct) -> Product {
        let product = Product {
            id: rand::thread_rng().gen_range(0..ID_UPPER_BOUND),
            name: new.name,
            info: new.info,
            price: new.price,
        };

        let mut products = self.write();
        products.push(product.clone());
        debug!(id = product.id, total = products.len(), "product created");

        product
    }

    /// 部分更新第一条匹配的产品；未找到时返回零值产品
    pub fn update_product(&self, id: i64, patch: ProductPatch) -> Product {
        let mut products = self.write();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply(product);
                debug!(id, "product updated");
                product.clone()
            }
            None => {
                debug!(id, "update target not found");
                Product::default()
            }
        }
    }

    /// 删除第一条匹配的产品并返回它；未找到时返回零值产品
    pub fn delete_product(&self, id: i64) -> Product {
        let mut products = self.write();
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                let removed = products.remove(index);
                debug!(id, total = products.len(), "product deleted");
                removed
            }
            None => {
                debug!(id, "delete target not found");
                Product::default()
            }
        }
    }
}
