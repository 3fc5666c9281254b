use azure_devops_mcp::azure::client::AzureDevOpsClient;
use azure_devops_mcp::config::{Config, Transport};
use azure_devops_mcp::mcp::server::AzureMcpServer;
use azure_devops_mcp::server::http;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the stdio transport
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::load()?;
    log::info!(
        "Starting {} against {}",
        config.server.service_name,
        config.azure.org_url
    );

    let client = AzureDevOpsClient::new(&config.azure);
    let mcp_server = AzureMcpServer::new(client);
    log::info!("Registered {} tools", mcp_server.registry().len());

    match config.server.transport {
        Transport::Http => {
            log::info!("Starting web server on port {}", config.server.port);
            http::run_server(mcp_server, config.server.port).await?;
        }
        Transport::Stdio => {
            log::info!("Starting stdio server");
            let service = mcp_server.serve(stdio()).await?;
            service.waiting().await?;
        }
    }

    Ok(())
}
