//! 核心响应处理模块
//!
//! 三种成功响应的固定外形：列表、单条记录、纯确认消息

use serde::Serialize;

/// 携带单条记录和提示消息的成功响应
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success",
            message: message.to_string(),
            data,
        }
    }
}

/// 携带记录列表和数量的成功响应
#[derive(Serialize)]
pub struct ListResponse<T> {
    pub status: &'static str,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            status: "success",
            data,
            count,
        }
    }
}

/// 仅携带确认消息的成功响应
#[derive(Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: String) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}
