mod common;
use common::*;

use resizable_pda::error::ResizablePdaError;

#[tokio::test]
async fn shorter_message_overwrites_prefix() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let pda = create_pda(&mut ctx, &authority, 1, "hello world").await;
    let before = get_account(&mut ctx, &pda).await;

    let ix = update_data_ix(&pda, &authority.pubkey(), "HELLO");
    send(&mut ctx, &[ix], &[&authority]).await.unwrap();

    let after = get_account(&mut ctx, &pda).await;
    assert_eq!(decode(&after).1, b"HELLO world");
    assert_eq!(after.data.len(), before.data.len());
    assert_eq!(after.lamports, before.lamports);
}

#[tokio::test]
async fn longer_message_is_too_large() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let pda = create_pda(&mut ctx, &authority, 1, "tiny").await;

    let ix = update_data_ix(&pda, &authority.pubkey(), "much longer");
    let err = send(&mut ctx, &[ix], &[&authority]).await.unwrap_err();
    assert_eq!(
        instruction_error(err),
        InstructionError::Custom(ResizablePdaError::DataTooLarge.code())
    );
}

#[tokio::test]
async fn resize_then_update_fits_longer_message() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let pda = create_pda(&mut ctx, &authority, 1, "tiny").await;

    let message = "much longer message";
    let resize = resize_account_ix(&pda, &authority.pubkey(), message.len() as u64);
    let update = update_data_ix(&pda, &authority.pubkey(), message);
    send(&mut ctx, &[resize, update], &[&authority]).await.unwrap();

    assert_eq!(decode(&get_account(&mut ctx, &pda).await).1, message.as_bytes());
}

#[tokio::test]
async fn non_authority_cannot_update() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let intruder = Keypair::new();
    let pda = create_pda(&mut ctx, &authority, 1, "mine").await;

    let ix = update_data_ix(&pda, &intruder.pubkey(), "ours");
    let err = send(&mut ctx, &[ix], &[&intruder]).await.unwrap_err();
    assert_eq!(
        instruction_error(err),
        InstructionError::Custom(ResizablePdaError::AuthorityMismatch.code())
    );
}

#[tokio::test]
async fn authority_must_sign() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let pda = create_pda(&mut ctx, &authority, 1, "mine").await;

    let mut ix = update_data_ix(&pda, &authority.pubkey(), "none");
    ix.accounts[1].is_signer = false;
    let err = send(&mut ctx, &[ix], &[]).await.unwrap_err();
    assert_eq!(instruction_error(err), InstructionError::MissingRequiredSignature);
}

#[tokio::test]
async fn log_shows_whole_stored_buffer() {
    let pt = common::program_test();
    let mut ctx = pt.start_with_context().await;
    let authority = funded_keypair(&mut ctx, 1_000_000_000).await;
    let pda = create_pda(&mut ctx, &authority, 1, "hello world").await;

    let ix = update_data_ix(&pda, &authority.pubkey(), "HELLO");
    let logs = send_with_logs(&mut ctx, &[ix], &[&authority]).await;
    assert!(
        logs.iter().any(|l| l.ends_with("Updated PDA with new message: HELLO world")),
        "{:?}",
        logs
    );
}
