use anyhow::Result;
use resizable_pda_client::{PdaClient, UpsertOutcome};

pub async fn run(client: &PdaClient, nonce: u64, message: &str) -> Result<()> {
    match client.upsert(nonce, message).await? {
        UpsertOutcome::Created { address, signature } => {
            println!("Created PDA {}", address);
            println!("Signature: {}", signature);
        }
        UpsertOutcome::Updated { address, outcome } => {
            println!("Updated PDA {}", address);
            for signature in &outcome.resize_signatures {
                println!("Resize signature: {}", signature);
            }
            println!("Signature: {}", outcome.update_signature);
        }
    }

    // Read back what landed on chain
    if let Some(stored) = client.get_message(nonce).await? {
        println!("Stored message: {}", stored);
    }
    Ok(())
}
