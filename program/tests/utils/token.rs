#![cfg(test)]
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
};
use litesvm::{types::TransactionResult, LiteSVM};
use spl_associated_token_account::{
    get_associated_token_address,
    instruction::create_associated_token_account,
};
use spl_token::solana_program::program_pack::Pack;
use super::send_ixs;

pub fn create_mint(svm: &mut LiteSVM, payer: &Keypair, authority: &Pubkey, decimals: u8) -> Pubkey {
    let mint = Keypair::new();
    let rent = svm.minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN);

    let ixs = [
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            rent,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint2(
            &spl_token::id(),
            &mint.pubkey(),
            authority,
            None,
            decimals,
        ).unwrap(),
    ];

    send_ixs(svm, &ixs, payer, &[payer, &mint]).unwrap();
    mint.pubkey()
}

pub fn create_ata(svm: &mut LiteSVM, payer: &Keypair, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let ix = create_associated_token_account(&payer.pubkey(), owner, mint, &spl_token::id());
    send_ixs(svm, &[ix], payer, &[payer]).unwrap();
    get_associated_token_address(owner, mint)
}

pub fn mint_to(
    svm: &mut LiteSVM,
    payer: &Keypair,
    mint: &Pubkey,
    mint_authority: &Keypair,
    destination: &Pubkey,
    amount: u64,
) -> TransactionResult {
    let ix = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &mint_authority.pubkey(),
        &[],
        amount,
    ).unwrap();

    if mint_authority.pubkey() == payer.pubkey() {
        send_ixs(svm, &[ix], payer, &[payer])
    } else {
        send_ixs(svm, &[ix], payer, &[payer, mint_authority])
    }
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm.get_account(token_account).unwrap();
    spl_token::state::Account::unpack(&account.data).unwrap().amount
}
