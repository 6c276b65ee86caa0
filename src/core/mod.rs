//! 核心层

pub mod error;
pub mod executor;
pub mod middleware;
