use std::net::{IpAddr, SocketAddr};

use record_service::{AppState, app, config::Config, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env();

    // 设置数据库连接池并初始化表结构
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to SQLite");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    // 设置应用状态
    let state = AppState {
        pool,
        config: config.clone(),
    };

    let app = app(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to loopback default");
            IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
