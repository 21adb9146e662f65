//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     assert_signer(payer_info)?;
//!     assert_owned_by(mint_info, program_id)?;
//!     assert_derived_address(metadata_info, &expected)?;
//!
//!     // then compute new state and write it back
//! }
//! ```

use crate::error::TokenMintError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(TokenMintError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

/// Assert that an account is the system program.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER / WRITABLE CHECKS
// =============================================================================

/// Assert that an account signed the transaction.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

/// Assert that an account is writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE / STATE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(TokenMintError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

/// Assert that an address has never been allocated.
///
/// An account still owned by the system program with no data and no
/// lamports has never been used. Anything else already holds state.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if the account holds data, lamports, or
/// belongs to another program.
pub fn assert_unallocated(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.owner)
        || account.lamports() > 0
        || !account.data_is_empty()
    {
        Err(TokenMintError::AlreadyInitialized.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// ADDRESS DERIVATION CHECKS
// =============================================================================

/// Assert that a supplied account sits at its derived address.
///
/// # Errors
///
/// Returns `AddressDerivationMismatch` if the keys differ.
pub fn assert_derived_address(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if account.key != expected {
        Err(TokenMintError::AddressDerivationMismatch.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that reports `Overflow` instead of wrapping.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or_else(|| TokenMintError::Overflow.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
