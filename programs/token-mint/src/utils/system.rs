//! System Program Allocation Helpers
//!
//! Every account this program creates is allocated through a CPI into the
//! system program, funded by the instruction's payer and assigned to this
//! program. Keypair accounts (data account, mint) sign for themselves in the
//! outer transaction; derived accounts (metadata, holder) are signed for
//! with their seeds.

use crate::error::TokenMintError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Fail with `InsufficientFunds` unless the payer holds at least `lamports`.
///
/// Checked up front so the caller sees the program's error rather than a
/// system-program failure from inside the CPI.
pub fn assert_can_pay(payer: &AccountInfo, lamports: u64) -> ProgramResult {
    if payer.lamports() < lamports {
        msg!(
            "Payer {} has {} lamports, {} required",
            payer.key,
            payer.lamports(),
            lamports
        );
        return Err(TokenMintError::InsufficientFunds.into());
    }
    Ok(())
}

/// Allocate a rent-exempt account whose keypair signed the transaction.
pub fn create_keypair_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
) -> ProgramResult {
    let lamports = rent.minimum_balance(space);
    assert_can_pay(payer, lamports)?;

    invoke(
        &system_instruction::create_account(
            payer.key,
            new_account.key,
            lamports,
            space as u64,
            owner,
        ),
        &[payer.clone(), new_account.clone(), system_program.clone()],
    )
}

/// Allocate a rent-exempt account at a derived address.
///
/// `create_account` refuses addresses that already hold lamports, and anyone
/// can send lamports to a derived address before it is used. In that case
/// the shortfall is topped up and the account is allocated and assigned in
/// separate steps.
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space);

    if new_account.lamports() > 0 {
        let shortfall = required_lamports.saturating_sub(new_account.lamports());
        if shortfall > 0 {
            assert_can_pay(payer, shortfall)?;
            invoke(
                &system_instruction::transfer(payer.key, new_account.key, shortfall),
                &[payer.clone(), new_account.clone(), system_program.clone()],
            )?;
        }

        invoke_signed(
            &system_instruction::allocate(new_account.key, space as u64),
            &[new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )?;

        invoke_signed(
            &system_instruction::assign(new_account.key, owner),
            &[new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )
    } else {
        assert_can_pay(payer, required_lamports)?;
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )
    }
}
