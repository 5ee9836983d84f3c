use anyhow::Result;
use resizable_pda_client::PdaClient;

pub async fn run(client: &PdaClient, nonce: u64) -> Result<()> {
    match client.fetch_pda(nonce).await? {
        Some(record) => {
            println!("PDA: {}", record.address);
            println!("Authority: {}", record.authority);
            println!("Nonce: {}", record.nonce);
            println!("Data length: {} bytes", record.data.len());
            println!("Lamports: {}", record.lamports);
            println!("Message: {}", record.message());
        }
        None => {
            println!("No PDA at {} (nonce {})", client.pda_address(nonce), nonce);
        }
    }
    Ok(())
}
