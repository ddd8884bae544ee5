//! 用户数据模型

use serde::{Deserialize, Deserializer, Serialize};

/// 用户记录
///
/// `is_active = false` 表示逻辑删除，记录不会被物理移除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

/// 创建用户请求 (POST)
///
/// name/email 必填；缺失、null、纯空白串均视为无效
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// 全量替换请求 (PUT)
///
/// name/email 必填；is_active 缺失或为 null 时重置为 true
#[derive(Debug, Default, Deserialize)]
pub struct ReplaceUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// 部分更新字段的三态表示：未提供 / 显式 null / 有值
///
/// 普通的 Option 无法区分"键不存在"和"键为 null"，
/// 而 PATCH 语义要求只校验、只覆盖请求体中出现的字段，
/// 所以在类型层面把这两种情况分开
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldPatch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> FieldPatch<T> {
    /// 字段是否出现在请求体中
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldPatch::Absent)
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 键存在时才会走到这里：null 映射为 Null，其余映射为 Value。
        // 键缺失由字段上的 #[serde(default)] 兜底为 Absent
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldPatch::Value(value),
            None => FieldPatch::Null,
        })
    }
}

/// 部分更新请求 (PATCH)：只触碰出现的字段
#[derive(Debug, Default, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub email: FieldPatch<String>,
    #[serde(default)]
    pub is_active: FieldPatch<bool>,
}
