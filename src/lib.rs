//! # 用户管理 REST API
//!
//! 基于 Axum 的内存用户 CRUD 服务，采用分层架构：
//! - app: 应用层，按业务领域划分的 handler/model/service
//! - core: 核心层，统一的错误和响应格式、中间件
//! - infrastructure: 基础设施层，配置和日志

pub mod app;
pub mod core;
pub mod infrastructure;

// Re-export the main application types
pub use app::users::handler::{router, AppState, SharedUserStore};
pub use app::users::model::{
    CreateUserRequest, FieldPatch, PatchUserRequest, ReplaceUserRequest, User,
};
pub use app::users::service::UserStore;
// Re-export the core error and config types
pub use crate::core::error::ApiError;
pub use infrastructure::config::{ConfigError, ServerConfig};
