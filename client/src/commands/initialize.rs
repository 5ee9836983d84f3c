use anyhow::Result;
use resizable_pda_client::PdaClient;
use tracing::info;

pub async fn run(client: &PdaClient) -> Result<()> {
    info!("Sending initialize");
    let signature = client.initialize().await?;
    println!("Your transaction signature {}", signature);
    Ok(())
}
