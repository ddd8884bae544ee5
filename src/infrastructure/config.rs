//! 服务配置基础设施

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// HTTP 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: ServerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 从默认路径加载配置，没有配置文件时使用默认值
    pub fn load() -> Result<Self, ConfigError> {
        let config_paths = ["config.toml", "./config/config.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                info!("从配置文件加载: {}", path);
                let config = Self::load_from_file(path)?;
                config.validate()?;
                return Ok(config);
            }
        }

        info!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        Ok(())
    }

    /// 完整的监听地址
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
