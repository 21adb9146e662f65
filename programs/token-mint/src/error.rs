//! Custom Error Types
//!
//! Every failure the token-mint program can report. Each variant maps to a
//! stable numeric code returned as `ProgramError::Custom(code)`.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-3 | Account validation errors |
//! | 4-6 | Authority and address errors |
//! | 7-9 | Operation errors |
//! | 10-12 | Holder account and decoding errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::TokenMintError;
//!
//! if mint.is_initialized {
//!     return Err(TokenMintError::AlreadyInitialized.into());
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the token-mint program.
///
/// Codes follow variant order. New variants go at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenMintError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-3)
    // =========================================================================

    /// Error 0: Account is owned by a program other than the one expected.
    #[error("Account not owned by the expected program")]
    InvalidAccountOwner,

    /// Error 1: Account data has the wrong length for its record type.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Account already holds state.
    ///
    /// Returned when re-running Initialize on a ready data account, and
    /// when the mint or metadata address supplied to CreateTokenMint is
    /// already in use.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Account has not been initialized yet.
    #[error("Account not initialized")]
    UninitializedAccount,

    // =========================================================================
    // AUTHORITY AND ADDRESS ERRORS (4-6)
    // =========================================================================

    /// Error 4: The signer does not match the recorded authority.
    #[error("Authority mismatch")]
    AuthorityMismatch,

    /// Error 5: The mint has no mint authority, so supply is fixed.
    #[error("Mint authority required")]
    MintAuthorityRequired,

    /// Error 6: A supplied address is not the one its seeds derive to.
    ///
    /// Covers both the metadata record address and the holder's
    /// associated token account address.
    #[error("Address does not match its deterministic derivation")]
    AddressDerivationMismatch,

    // =========================================================================
    // OPERATION ERRORS (7-9)
    // =========================================================================

    /// Error 7: The payer cannot cover rent for the accounts to allocate.
    #[error("Insufficient funds to allocate account")]
    InsufficientFunds,

    /// Error 8: Arithmetic overflow on supply, balance or amount scaling.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 9: An argument is outside the limits the program accepts.
    ///
    /// Oversized name, symbol or URI, or decimals above the maximum.
    #[error("Validation error")]
    ValidationError,

    // =========================================================================
    // HOLDER ACCOUNT AND DECODING ERRORS (10-12)
    // =========================================================================

    /// Error 10: Holder account is bound to a different mint.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 11: Holder account is bound to a different owner.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 12: Instruction data could not be decoded.
    #[error("Invalid instruction")]
    InvalidInstruction,
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<TokenMintError> for ProgramError {
    fn from(e: TokenMintError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for TokenMintError {
    fn type_of() -> &'static str {
        "TokenMintError"
    }
}

/// Maps a `Custom(code)` back onto its variant.
///
/// `PrintProgramError` needs this to turn a raw code into a readable log line.
impl FromPrimitive for TokenMintError {
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Self::from_u64(n as u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        use TokenMintError::*;
        Some(match n {
            0 => InvalidAccountOwner,
            1 => InvalidAccountDataLength,
            2 => AlreadyInitialized,
            3 => UninitializedAccount,
            4 => AuthorityMismatch,
            5 => MintAuthorityRequired,
            6 => AddressDerivationMismatch,
            7 => InsufficientFunds,
            8 => Overflow,
            9 => ValidationError,
            10 => MintMismatch,
            11 => OwnerMismatch,
            12 => InvalidInstruction,
            _ => return None,
        })
    }
}

impl PrintProgramError for TokenMintError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ProgramError::from(TokenMintError::InvalidAccountOwner),
            ProgramError::Custom(0)
        );
        assert_eq!(
            ProgramError::from(TokenMintError::AlreadyInitialized),
            ProgramError::Custom(2)
        );
        assert_eq!(
            ProgramError::from(TokenMintError::AuthorityMismatch),
            ProgramError::Custom(4)
        );
        assert_eq!(
            ProgramError::from(TokenMintError::AddressDerivationMismatch),
            ProgramError::Custom(6)
        );
        assert_eq!(
            ProgramError::from(TokenMintError::InvalidInstruction),
            ProgramError::Custom(12)
        );
    }

    #[test]
    fn test_from_primitive_matches_discriminant() {
        for code in 0u64..=12 {
            let decoded = TokenMintError::from_u64(code).unwrap();
            assert_eq!(decoded as u64, code);
        }
        assert_eq!(TokenMintError::from_u64(13), None);
        assert_eq!(TokenMintError::from_i64(-1), None);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(TokenMintError::Overflow.to_string(), "Arithmetic overflow");
        assert_eq!(
            TokenMintError::AuthorityMismatch.to_string(),
            "Authority mismatch"
        );
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

HOW CALLERS SEE THESE ERRORS
============================

A failing handler returns Err(TokenMintError::AuthorityMismatch.into()).
The runtime aborts the whole transaction and the client observes:

    TransactionError::InstructionError(index, InstructionError::Custom(4))

Nothing from the failed transaction is persisted: allocations made through
the system program in the same instruction are rolled back too.

PRINTING
========

The entrypoint calls error.print::<TokenMintError>() before returning.
PrintProgramError for ProgramError looks at Custom(code), asks
FromPrimitive for the variant, then calls our print(), which logs:

    Program log: Error: Authority mismatch

Codes with no variant log "Error: Unknown".

CODE STABILITY
==============

Clients match on numbers. Reordering variants changes every code after the
moved one, so new variants only ever go at the end, and from_u64 above is
extended in the same commit.
*/
