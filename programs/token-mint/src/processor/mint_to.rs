//! MintTo Instruction Processor
//!
//! Mints new tokens to the owner's associated holder account, creating that
//! account first if it does not exist yet.

use crate::error::TokenMintError;
use crate::pda::find_holder_address;
use crate::state::{Account, DataAccount, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
    sysvar::Sysvar,
};

/// Process MintTo instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[]` Data account
/// 2. `[writable]` Mint
/// 3. `[writable]` Holder token account (derived from owner and mint)
/// 4. `[]` Owner
/// 5. `[signer]` Mint authority
/// 6. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let data_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let token_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // Data account
    assert_owned_by(data_info, program_id)?;
    assert_data_length(data_info, DataAccount::LEN)?;
    let context = DataAccount::unpack_from_slice(&data_info.data.borrow())?;
    if !context.is_initialized {
        return Err(TokenMintError::UninitializedAccount.into());
    }

    // Mint
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;
    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(TokenMintError::UninitializedAccount.into());
    }

    validate_mint_authority(&mint, authority_info)?;

    // Holder account address
    let (expected_holder, bump) = find_holder_address(owner_info.key, mint_info.key, program_id);
    assert_derived_address(token_info, &expected_holder)?;
    assert_writable(token_info)?;

    // Get-or-create: load the existing record or start from an empty one
    let exists = token_info.owner == program_id;
    let mut holder = if exists {
        assert_data_length(token_info, Account::LEN)?;
        let holder = Account::unpack_from_slice(&token_info.data.borrow())?;
        if !holder.is_initialized {
            return Err(TokenMintError::UninitializedAccount.into());
        }
        if holder.mint != *mint_info.key {
            return Err(TokenMintError::MintMismatch.into());
        }
        if holder.owner != *owner_info.key {
            return Err(TokenMintError::OwnerMismatch.into());
        }
        holder
    } else if system_program::check_id(token_info.owner) && token_info.data_is_empty() {
        Account::new(*mint_info.key, *owner_info.key)
    } else {
        return Err(TokenMintError::InvalidAccountOwner.into());
    };

    // Compute both credits before writing either
    let new_supply = checked_add(mint.supply, amount)?;
    let new_balance = checked_add(holder.amount, amount)?;

    if !exists {
        let rent = Rent::get()?;
        create_pda_account(
            payer_info,
            token_info,
            system_program_info,
            &rent,
            Account::LEN,
            program_id,
            &[
                owner_info.key.as_ref(),
                program_id.as_ref(),
                mint_info.key.as_ref(),
                &[bump],
            ],
        )?;
        msg!("Created holder account {} for {}", token_info.key, owner_info.key);
    }

    mint.supply = new_supply;
    holder.amount = new_balance;

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    holder.pack_into_slice(&mut token_info.data.borrow_mut())?;

    msg!("Minted {} to {}", amount, token_info.key);

    Ok(())
}
