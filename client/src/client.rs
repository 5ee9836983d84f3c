//! RPC client for the resizable PDA program.

use resizable_pda::state::PdaAccount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_program,
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    instructions::{self, derive_pda, program_id, resize_steps},
};

/// Resize instructions sent per transaction when growth has to be split.
pub const RESIZE_STEPS_PER_TX: usize = 8;

/// Decoded PDA account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaRecord {
    pub address: Pubkey,
    pub authority: Pubkey,
    pub nonce: u64,
    pub data: Vec<u8>,
    pub lamports: u64,
}

impl PdaRecord {
    pub fn decode(address: Pubkey, account: &Account) -> Result<Self> {
        if account.owner != program_id() {
            return Err(ClientError::InvalidAccount {
                address,
                reason: format!("owned by {}", account.owner),
            });
        }
        let header = PdaAccount::from_bytes(&account.data).map_err(|e| ClientError::InvalidAccount {
            address,
            reason: format!("{e:?}"),
        })?;
        Ok(Self {
            address,
            authority: Pubkey::new_from_array(header.authority),
            nonce: header.nonce(),
            data: PdaAccount::stored_data(&account.data).to_vec(),
            lamports: account.lamports,
        })
    }

    /// Stored data as text, with the zero padding left by resizes removed.
    pub fn message(&self) -> String {
        String::from_utf8_lossy(&self.data)
            .trim_end_matches('\0')
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Empty when the stored buffer was already large enough
    pub resize_signatures: Vec<Signature>,
    pub update_signature: Signature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created { address: Pubkey, signature: Signature },
    Updated { address: Pubkey, outcome: UpdateOutcome },
}

pub struct PdaClient {
    rpc: RpcClient,
    payer: Keypair,
}

impl PdaClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let payer = config.load_keypair()?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
        info!("Using RPC {} as {}", config.rpc_url, payer.pubkey());
        Ok(Self::with_rpc(rpc, payer))
    }

    pub fn with_rpc(rpc: RpcClient, payer: Keypair) -> Self {
        Self { rpc, payer }
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn pda_address(&self, nonce: u64) -> Pubkey {
        derive_pda(&self.payer(), nonce).0
    }

    /// Signs with the payer, submits and waits for confirmation.
    async fn send(&self, ixs: &[Instruction]) -> Result<Signature> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(ixs, Some(&self.payer()), &[&self.payer], blockhash);
        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        debug!("Confirmed {}", signature);
        Ok(signature)
    }

    pub async fn initialize(&self) -> Result<Signature> {
        self.send(&[instructions::initialize()]).await
    }

    /// Record at the PDA for `nonce`. An address that only holds lamports sent
    /// to it before creation counts as absent.
    pub async fn fetch_pda(&self, nonce: u64) -> Result<Option<PdaRecord>> {
        let address = self.pda_address(nonce);
        let response = self
            .rpc
            .get_account_with_commitment(&address, self.rpc.commitment())
            .await?;
        response
            .value
            .filter(|account| !is_unallocated(account))
            .map(|account| PdaRecord::decode(address, &account))
            .transpose()
    }

    pub async fn get_message(&self, nonce: u64) -> Result<Option<String>> {
        Ok(self.fetch_pda(nonce).await?.map(|record| record.message()))
    }

    pub async fn create_pda(&self, nonce: u64, message: &str) -> Result<(Pubkey, Signature)> {
        let address = self.pda_address(nonce);
        info!("Creating PDA {} (nonce {})", address, nonce);
        let signature = self
            .send(&[instructions::create_account(&self.payer(), nonce, message)])
            .await?;
        Ok((address, signature))
    }

    /// Resizes the data buffer to `new_size`, splitting large growth across
    /// several instructions and transactions.
    pub async fn resize_pda(&self, nonce: u64, new_size: u64) -> Result<Vec<Signature>> {
        let record = self
            .fetch_pda(nonce)
            .await?
            .ok_or_else(|| ClientError::AccountNotFound(self.pda_address(nonce)))?;
        self.resize_from(&record, new_size).await
    }

    async fn resize_from(&self, record: &PdaRecord, new_size: u64) -> Result<Vec<Signature>> {
        let current = record.data.len() as u64;
        info!("Resizing PDA {} from {} to {} bytes", record.address, current, new_size);

        let ixs: Vec<Instruction> = resize_steps(current, new_size)
            .into_iter()
            .map(|size| instructions::resize_account(&self.payer(), record.nonce, size))
            .collect();

        let mut signatures = Vec::new();
        for chunk in ixs.chunks(RESIZE_STEPS_PER_TX) {
            signatures.push(self.send(chunk).await?);
        }
        Ok(signatures)
    }

    /// Grows the buffer first when `message` does not fit, then overwrites it.
    pub async fn update_pda(&self, nonce: u64, message: &str) -> Result<UpdateOutcome> {
        let record = self
            .fetch_pda(nonce)
            .await?
            .ok_or_else(|| ClientError::AccountNotFound(self.pda_address(nonce)))?;
        self.update_record(&record, message).await
    }

    async fn update_record(&self, record: &PdaRecord, message: &str) -> Result<UpdateOutcome> {
        let new_size = message.len() as u64;
        let resize_signatures = if new_size > record.data.len() as u64 {
            self.resize_from(record, new_size).await?
        } else {
            Vec::new()
        };

        // resize is confirmed by now, so the update sees the new size
        let update_signature = self
            .send(&[instructions::update_data(&self.payer(), record.nonce, message)])
            .await?;

        Ok(UpdateOutcome {
            resize_signatures,
            update_signature,
        })
    }

    /// Creates the PDA when it does not exist yet, otherwise updates it.
    pub async fn upsert(&self, nonce: u64, message: &str) -> Result<UpsertOutcome> {
        match self.fetch_pda(nonce).await? {
            None => {
                let (address, signature) = self.create_pda(nonce, message).await?;
                Ok(UpsertOutcome::Created { address, signature })
            }
            Some(record) => {
                let outcome = self.update_record(&record, message).await?;
                Ok(UpsertOutcome::Updated {
                    address: record.address,
                    outcome,
                })
            }
        }
    }
}

fn is_unallocated(account: &Account) -> bool {
    account.owner == system_program::id() && account.data.is_empty()
}
