use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fostering_cli::main_entry().await
}
