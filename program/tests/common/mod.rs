#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

use resizable_pda::{
    instruction::ResizablePdaInstruction,
    state::{CreateAccountData, PdaAccount, ResizeAccountData, UpdateDataArgs},
};

pub const SEED_PREFIX: &[u8] = b"my-seed";

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(resizable_pda::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = env::var("BPF_OUT_DIR")
        .unwrap_or_else(|_| format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR")));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("resizable_pda.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_program("resizable_pda", program_id(), None);
    pt
}

pub fn find_pda(user: &Pubkey, nonce: u64) -> Pubkey {
    Pubkey::find_program_address(&[SEED_PREFIX, user.as_ref(), &nonce.to_le_bytes()], &program_id()).0
}

// ---- instruction builders ----

pub fn initialize_ix() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: vec![ResizablePdaInstruction::Initialize as u8],
    }
}

pub fn create_account_ix(pda: &Pubkey, user: &Pubkey, nonce: u64, message: &str) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*pda, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(solana_sdk::system_program::id(), false),
        ],
        data: CreateAccountData { nonce, message }.pack(),
    }
}

pub fn resize_account_ix(pda: &Pubkey, authority: &Pubkey, new_size: u64) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*pda, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(solana_sdk::system_program::id(), false),
        ],
        data: ResizeAccountData { new_size }.pack(),
    }
}

pub fn update_data_ix(pda: &Pubkey, authority: &Pubkey, new_message: &str) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*pda, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data: UpdateDataArgs { new_message }.pack(),
    }
}

// ---- transaction helpers ----

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Signs with the context payer plus `signers` and processes the transaction.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&ctx.payer.pubkey()), &all, ctx.last_blockhash);
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

/// Like `send`, but returns the program log lines. Panics if the transaction fails.
pub async fn send_with_logs(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Vec<String> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&ctx.payer.pubkey()), &all, ctx.last_blockhash);
    let res = ctx.banks_client.process_transaction_with_metadata(tx).await.unwrap();
    assert!(res.result.is_ok(), "transaction failed: {:?}", res.result);
    res.metadata.expect("metadata").log_messages
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let ix = system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount);
    send(ctx, &[ix], &[]).await.unwrap();
}

/// Fresh keypair holding `lamports`, so it can pay rent on its own.
pub async fn funded_keypair(ctx: &mut ProgramTestContext, lamports: u64) -> Keypair {
    let kp = Keypair::new();
    transfer(ctx, &kp.pubkey(), lamports).await;
    kp
}

/// Creates a PDA owned by `user` (who also pays its rent) and returns its address.
pub async fn create_pda(ctx: &mut ProgramTestContext, user: &Keypair, nonce: u64, message: &str) -> Pubkey {
    let pda = find_pda(&user.pubkey(), nonce);
    let ix = create_account_ix(&pda, &user.pubkey(), nonce, message);
    send(ctx, &[ix], &[user]).await.unwrap();
    pda
}

pub async fn get_account(ctx: &mut ProgramTestContext, address: &Pubkey) -> Account {
    ctx.banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("account should exist")
}

pub async fn lamports(ctx: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    ctx.banks_client.get_balance(*address).await.unwrap()
}

pub async fn minimum_balance(ctx: &mut ProgramTestContext, data_len: usize) -> u64 {
    ctx.banks_client.get_rent().await.unwrap().minimum_balance(data_len)
}

/// Header and stored data of a PDA account.
pub fn decode(account: &Account) -> (PdaAccount, Vec<u8>) {
    let header = *PdaAccount::from_bytes(&account.data).unwrap();
    (header, PdaAccount::stored_data(&account.data).to_vec())
}

pub fn instruction_error(err: BanksClientError) -> InstructionError {
    match err.unwrap() {
        TransactionError::InstructionError(_, ie) => ie,
        other => panic!("unexpected transaction error: {:?}", other),
    }
}
