//! 用户 HTTP 处理层
//!
//! 处理器只负责解析请求和渲染响应，业务决策全部委托给 `UserStore`。

use crate::app::users::model::{CreateUserRequest, PatchUserRequest, ReplaceUserRequest, User};
use crate::app::users::service::UserStore;
use crate::core::error::ApiError;
use crate::core::middleware::request_logging_middleware;
use crate::core::response::{DataResponse, ListResponse, MessageResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{middleware, Json, Router};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 共享的用户存储
pub type SharedUserStore = Arc<Mutex<UserStore>>;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub store: SharedUserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// 获取所有激活用户
pub async fn list_users(State(state): State<AppState>) -> Json<ListResponse<User>> {
    let store = state.store.lock().unwrap();
    Json(ListResponse::success(store.list_active()))
}

/// 创建用户
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<DataResponse<User>>), ApiError> {
    let mut store = state.store.lock().unwrap();
    let user = store.create(request)?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success("User created successfully", user)),
    ))
}

/// 全量更新用户
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReplaceUserRequest>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    let mut store = state.store.lock().unwrap();
    let user = store.replace(&id, request)?;
    Ok(Json(DataResponse::success(
        "User updated successfully",
        user,
    )))
}

/// 部分更新用户
pub async fn merge_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PatchUserRequest>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    let mut store = state.store.lock().unwrap();
    let user = store.merge(&id, request)?;
    Ok(Json(DataResponse::success(
        "User updated successfully",
        user,
    )))
}

/// 逻辑删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.lock().unwrap();
    store.logical_delete(&id)?;
    Ok(Json(MessageResponse::success(format!(
        "User with ID {} has been successfully deleted",
        id
    ))))
}

/// 健康检查处理器
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.store.lock().unwrap();
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": {
            "type": "in-memory",
            "users_count": store.len()
        }
    }))
}

/// 组装用户路由
///
/// 路径末尾的斜杠是接口约定的一部分，不注册无斜杠的变体。
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/index/", get(list_users).post(create_user))
        .route(
            "/index/:id/",
            put(replace_user).patch(merge_user).delete(delete_user),
        )
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
