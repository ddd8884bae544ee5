//! 用户管理 REST API 服务入口

use anyhow::Result;
use demo_rest_api::infrastructure::config::ServerConfig;
use demo_rest_api::infrastructure::logger::Logger;
use demo_rest_api::{router, AppState, UserStore};
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动用户管理 REST API 服务器...");

    // 加载配置
    let config = ServerConfig::load()?;

    // 初始化示例数据
    let store = UserStore::with_sample_data();
    info!("✅ 已初始化 {} 个示例用户", store.len());

    let state = AppState::new(store);
    let app = router(state);

    // 绑定地址
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 用户管理服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /index/        - 获取所有激活用户");
    info!("   POST   /index/        - 创建新用户");
    info!("   PUT    /index/:id/    - 全量更新用户");
    info!("   PATCH  /index/:id/    - 部分更新用户");
    info!("   DELETE /index/:id/    - 逻辑删除用户");
    info!("   GET    /health        - 健康检查");

    // 启动服务器
    axum::serve(listener, app).await?;

    Ok(())
}
