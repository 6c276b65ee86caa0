use product_graphql::infrastructure::config::config_path;
use product_graphql::infrastructure::logger::Logger;
use product_graphql::{build_app, Config, CoreError, ProductService};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = config_path();
    let config = Config::load(path.as_deref())?;
    Logger::init(&config.logging)?;

    match &path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let service = ProductService::seeded();
    info!("✅ 已初始化 {} 个示例产品", service.len());

    let app = build_app(service, &config);

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| CoreError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("🚀 Server is running on http://{}{}", addr, config.http.route);
    info!("   GET/POST {}?query=... - GraphQL 查询与变更", config.http.route);

    axum::serve(listener, app).await.map_err(CoreError::Serve)?;

    Ok(())
}
