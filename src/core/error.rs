//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::collections::HashMap;

/// API 错误类型
///
/// 只有两种失败：字段校验失败和目标记录不存在
#[derive(Debug)]
pub enum ApiError {
    /// 一个或多个必填字段缺失/为空，携带 字段名 → 错误信息 的映射
    Validation(HashMap<String, String>),
    /// 指定 ID 没有匹配的记录，携带原始 ID
    NotFound(String),
}

impl ApiError {
    /// 构造针对指定用户 ID 的未找到错误
    pub fn not_found(id: &str) -> Self {
        ApiError::NotFound(id.to_string())
    }
}

/// 校验失败响应结构
#[derive(Serialize)]
struct ValidationBody {
    status: &'static str,
    message: &'static str,
    errors: HashMap<String, String>,
}

/// 记录未找到响应结构
#[derive(Serialize)]
struct NotFoundBody {
    status: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    status: "error",
                    message: "Validation failed",
                    errors,
                }),
            )
                .into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody {
                    status: "error",
                    message: format!("User with ID {} not found", id),
                }),
            )
                .into_response(),
        }
    }
}
