//! # Omega 定价演示服务
//!
//! 单一接口 `GET /pricing/records.json` 的演示服务器，按 `demo` 场景返回
//! 固定产品列表与随机价格。
//! - `app`: 路由、处理器与记录生成
//! - `core`: 错误处理与中间件
//! - `infrastructure`: 配置与日志
//! - `client`: 接口客户端

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;

pub use app::{pricing::service::generate, router};
