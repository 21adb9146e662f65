//! Authority Validation
//!
//! MintTo is gated on the mint's recorded mint authority. The supplied
//! account must be that exact key and must have signed.

use crate::error::TokenMintError;
use crate::state::Mint;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
};

/// Validate `authority_info` as the mint authority of `mint`.
///
/// # Errors
///
/// * `MintAuthorityRequired` - the mint's authority was never set or was removed
/// * `AuthorityMismatch` - a different key was supplied
/// * `MissingRequiredSignature` - the right key, but it did not sign
pub fn validate_mint_authority(mint: &Mint, authority_info: &AccountInfo) -> ProgramResult {
    let expected = mint
        .mint_authority
        .as_ref()
        .ok_or(TokenMintError::MintAuthorityRequired)?;

    if authority_info.key != expected {
        return Err(TokenMintError::AuthorityMismatch.into());
    }

    if !authority_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}
