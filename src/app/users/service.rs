//! 用户业务逻辑层
//!
//! 提供基于内存的用户存储和校验逻辑。

use crate::app::users::model::{
    CreateUserRequest, FieldPatch, PatchUserRequest, ReplaceUserRequest, User,
};
use crate::core::error::ApiError;
use std::collections::HashMap;
use uuid::Uuid;

/// 内存用户存储
///
/// 所有操作都在锁内完成，调用方通过 `Arc<Mutex<UserStore>>` 共享。
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// 创建带示例数据的存储
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.seed("User01", "user01@example.com", true);
        store.seed("User02", "user02@example.com", true);
        store.seed("User03", "user03@example.com", false);
        store
    }

    fn seed(&mut self, name: &str, email: &str, is_active: bool) {
        self.users.push(User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            is_active,
        });
    }

    /// 当前用户总数，包含未激活用户
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// 查询所有激活用户
    pub fn list_active(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| user.is_active)
            .cloned()
            .collect()
    }

    /// 创建新用户
    ///
    /// name 和 email 必填且不能为空白，新用户默认激活。
    pub fn create(&mut self, request: CreateUserRequest) -> Result<User, ApiError> {
        let (name, email) = validate_required(request.name, request.email)?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            is_active: true,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// 全量替换用户
    ///
    /// 先查找再校验，未找到时返回 404。is_active 缺省或为 null 时重置为激活。
    pub fn replace(&mut self, id: &str, request: ReplaceUserRequest) -> Result<User, ApiError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found(id))?;

        let (name, email) = validate_required(request.name, request.email)?;

        user.name = name;
        user.email = email;
        // PUT 是全量替换语义，未提供 is_active 时恢复为激活状态
        user.is_active = request.is_active.unwrap_or(true);
        Ok(user.clone())
    }

    /// 部分更新用户
    ///
    /// 只校验请求中出现的字段，空请求体是合法的无操作更新。
    pub fn merge(&mut self, id: &str, request: PatchUserRequest) -> Result<User, ApiError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found(id))?;

        let mut errors = HashMap::new();
        let name = validate_patch_field(
            &request.name,
            "name",
            "Name field cannot be empty",
            &mut errors,
        );
        let email = validate_patch_field(
            &request.email,
            "email",
            "Email field cannot be empty",
            &mut errors,
        );
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        match request.is_active {
            FieldPatch::Absent => {}
            // 显式传 null 视为取消激活
            FieldPatch::Null => user.is_active = false,
            FieldPatch::Value(active) => user.is_active = active,
        }
        Ok(user.clone())
    }

    /// 逻辑删除用户
    ///
    /// 只是将 is_active 置为 false，记录仍然保留。
    pub fn logical_delete(&mut self, id: &str) -> Result<(), ApiError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found(id))?;

        user.is_active = false;
        Ok(())
    }
}

/// 归一化可选字符串字段，空白视为缺失
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 校验创建与全量替换的必填字段
fn validate_required(
    name: Option<String>,
    email: Option<String>,
) -> Result<(String, String), ApiError> {
    let mut errors = HashMap::new();
    let name = normalize(name);
    let email = normalize(email);

    if name.is_none() {
        errors.insert(
            "name".to_string(),
            "Name field is required and cannot be empty".to_string(),
        );
    }
    if email.is_none() {
        errors.insert(
            "email".to_string(),
            "Email field is required and cannot be empty".to_string(),
        );
    }

    match (name, email) {
        (Some(name), Some(email)) => Ok((name, email)),
        _ => Err(ApiError::Validation(errors)),
    }
}

/// 校验部分更新中出现的字符串字段
///
/// 字段缺省时返回 None 且不报错，出现但为空白时记录错误。
fn validate_patch_field(
    field: &FieldPatch<String>,
    key: &str,
    message: &str,
    errors: &mut HashMap<String, String>,
) -> Option<String> {
    match field {
        FieldPatch::Absent => None,
        FieldPatch::Value(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            errors.insert(key.to_string(), message.to_string());
            None
        }
    }
}
