use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    confluence_mcp::main_entry().await
}
