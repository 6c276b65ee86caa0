//! 查询执行
//!
//! 解析、校验和执行都由 async-graphql 完成，这里负责记录执行错误，
//! 并把结果中的整数值浮点数按整数输出（`632.0` 输出为 `632`）。

use async_graphql::{Number, ObjectType, Response, Schema, SubscriptionType, Value};
use tracing::warn;

// 2^53，超出后 f64 不能精确表示整数
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub async fn execute<Q, M, S>(schema: &Schema<Q, M, S>, query: &str) -> Response
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let mut response = schema.execute(query).await;
    normalize_numbers(&mut response.data);
    if response.is_err() {
        for error in &response.errors {
            warn!(message = %error.message, locations = ?error.locations, path = ?error.path, "GraphQL 执行错误");
        }
    }
    response
}

/// 递归地把小数部分为 0 的浮点数替换为整数
pub fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            if let Some(f) = number.as_f64() {
                if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
                    *number = Number::from(f as i64);
                }
            }
        }
        Value::List(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(fields) => fields.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}
