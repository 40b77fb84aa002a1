#![cfg(test)]
use std::path::PathBuf;
use solana_sdk::{
    instruction::Instruction,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};
use litesvm::{types::TransactionResult, LiteSVM};
use super::print_tx;

pub fn program_path() -> PathBuf {
    let mut so_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    so_path.push("../target/deploy/paygate.so");
    so_path
}

pub fn setup_svm() -> LiteSVM {
    let so_path = program_path();
    let program_bytes = std::fs::read(&so_path)
        .expect("run cargo build-sbf first");

    let mut svm = LiteSVM::new();
    svm.add_program(paygate_api::ID, &program_bytes);
    svm
}

pub fn send_tx(svm: &mut LiteSVM, tx: Transaction) -> TransactionResult {
    let res = svm.send_transaction(tx.clone());

    let meta = match res.as_ref() {
        Ok(v) => v.clone(),
        Err(v) => v.meta.clone()
    };

    print_tx(meta, tx);

    if let Err(e) = res.as_ref() {
        println!("error:\t{:?}", e.err);
    }

    res
}

/// Signs with a fresh blockhash so identical instructions can be resent.
pub fn send_ixs(
    svm: &mut LiteSVM,
    ixs: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionResult {
    svm.expire_blockhash();
    let blockhash = svm.latest_blockhash();
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, blockhash);
    send_tx(svm, tx)
}

pub fn create_payer(svm: &mut LiteSVM) -> Keypair {
    let payer_kp = Keypair::new();
    let payer_pk = payer_kp.pubkey();
    svm.airdrop(&payer_pk, 1_000_000_000).unwrap();
    payer_kp
}

pub fn create_keypair() -> Keypair {
    Keypair::new()
}

pub fn balance(svm: &LiteSVM, address: &solana_sdk::pubkey::Pubkey) -> u64 {
    svm.get_balance(address).unwrap_or(0)
}
