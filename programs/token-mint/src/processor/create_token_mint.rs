//! CreateTokenMint Instruction Processor
//!
//! Creates a mint and its metadata record together. Either both exist
//! afterwards or, if any check or allocation fails, neither does.

use crate::error::TokenMintError;
use crate::pda::{find_metadata_address, METADATA_SEED};
use crate::state::metadata::validate_metadata_fields;
use crate::state::mint::MAX_DECIMALS;
use crate::state::{COption, DataAccount, Metadata, Mint, Pack};
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

/// Process CreateTokenMint instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Data account
/// 2. `[writable, signer]` Mint (fresh keypair)
/// 3. `[writable]` Metadata (derived address)
/// 4. `[]` Mint authority
/// 5. `[]` System program
#[allow(clippy::too_many_arguments)]
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    freeze_authority: Option<Pubkey>,
    decimals: u8,
    name: String,
    symbol: String,
    uri: String,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let data_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let metadata_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    // Arguments
    validate_metadata_fields(&name, &symbol, &uri)?;
    if decimals > MAX_DECIMALS {
        return Err(TokenMintError::ValidationError.into());
    }

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // Data account must be a ready execution context
    assert_owned_by(data_info, program_id)?;
    assert_writable(data_info)?;
    assert_data_length(data_info, DataAccount::LEN)?;
    let mut context = DataAccount::unpack_from_slice(&data_info.data.borrow())?;
    if !context.is_initialized {
        return Err(TokenMintError::UninitializedAccount.into());
    }

    // Mint: co-signed by its own keypair and never used
    assert_signer(mint_info)?;
    assert_writable(mint_info)?;
    assert_unallocated(mint_info)?;

    // Metadata: exactly the derived address, not yet created
    let (expected_metadata, bump) = find_metadata_address(mint_info.key, program_id);
    assert_derived_address(metadata_info, &expected_metadata)?;
    assert_writable(metadata_info)?;
    if !system_program::check_id(metadata_info.owner) || !metadata_info.data_is_empty() {
        return Err(TokenMintError::AlreadyInitialized.into());
    }

    let rent = Rent::get()?;
    // A pre-funded metadata address only needs its shortfall
    let metadata_rent = rent
        .minimum_balance(Metadata::LEN)
        .saturating_sub(metadata_info.lamports());
    let total_rent = checked_add(rent.minimum_balance(Mint::LEN), metadata_rent)?;
    assert_can_pay(payer_info, total_rent)?;

    // New state, built before anything is allocated
    let mint = Mint {
        mint_authority: COption::some(*mint_authority_info.key),
        supply: 0,
        decimals,
        is_initialized: true,
        freeze_authority: freeze_authority.into(),
    };
    let metadata = Metadata {
        is_initialized: true,
        update_authority: *mint_authority_info.key,
        mint: *mint_info.key,
        name,
        symbol,
        uri,
    };
    context.mints_created = checked_add(context.mints_created, 1)?;

    create_keypair_account(
        payer_info,
        mint_info,
        system_program_info,
        &rent,
        Mint::LEN,
        program_id,
    )?;
    create_pda_account(
        payer_info,
        metadata_info,
        system_program_info,
        &rent,
        Metadata::LEN,
        program_id,
        &[
            METADATA_SEED,
            program_id.as_ref(),
            mint_info.key.as_ref(),
            &[bump],
        ],
    )?;

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    metadata.pack_into_slice(&mut metadata_info.data.borrow_mut())?;
    context.pack_into_slice(&mut data_info.data.borrow_mut())?;

    msg!(
        "Created mint {} ({} decimals) with metadata {}",
        mint_info.key,
        decimals,
        metadata_info.key
    );

    Ok(())
}
