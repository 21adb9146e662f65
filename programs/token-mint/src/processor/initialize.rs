//! Initialize Instruction Processor
//!
//! Allocates the program data account and writes its default state.

use crate::error::TokenMintError;
use crate::state::{DataAccount, Pack};
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

/// Process Initialize instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable, signer]` Data account
/// 2. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let data_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_signer(data_info)?;
    assert_writable(data_info)?;
    assert_system_program(system_program_info)?;

    if data_info.owner == program_id {
        // Allocated to us already. Only an unwritten record may be initialized.
        assert_data_length(data_info, DataAccount::LEN)?;
        let existing = DataAccount::unpack_from_slice(&data_info.data.borrow())?;
        if existing.is_initialized {
            return Err(TokenMintError::AlreadyInitialized.into());
        }
    } else if system_program::check_id(data_info.owner) {
        assert_unallocated(data_info)?;
        let rent = Rent::get()?;
        create_keypair_account(
            payer_info,
            data_info,
            system_program_info,
            &rent,
            DataAccount::LEN,
            program_id,
        )?;
        msg!("Allocated data account {}", data_info.key);
    } else {
        return Err(TokenMintError::InvalidAccountOwner.into());
    }

    let state = DataAccount {
        is_initialized: true,
        authority: *payer_info.key,
        mints_created: 0,
    };
    state.pack_into_slice(&mut data_info.data.borrow_mut())?;

    Ok(())
}
