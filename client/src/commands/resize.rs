use anyhow::Result;
use resizable_pda_client::PdaClient;

pub async fn run(client: &PdaClient, nonce: u64, new_size: u64) -> Result<()> {
    let signatures = client.resize_pda(nonce, new_size).await?;
    if signatures.is_empty() {
        println!("PDA already holds {} bytes", new_size);
        return Ok(());
    }
    for signature in &signatures {
        println!("Signature: {}", signature);
    }
    println!("Resized PDA {} to {} bytes", client.pda_address(nonce), new_size);
    Ok(())
}
