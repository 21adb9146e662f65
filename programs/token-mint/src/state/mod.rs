//! Account State Structures
//!
//! Records stored in accounts owned by the token-mint program.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | DataAccount | 41 bytes | Program execution context, created once |
//! | Mint | 82 bytes | Defines a token type |
//! | Account | 73 bytes | Holder balance for one (owner, mint) pair |
//! | Metadata | 319 bytes | Name, symbol and URI bound to a mint |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Text stored as a `u32` length followed by a zero-padded buffer

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod data_account;
pub mod metadata;
pub mod mint;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::Account;
pub use data_account::DataAccount;
pub use metadata::Metadata;
pub use mint::Mint;

use crate::error::TokenMintError;
use arrayref::{array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// `unpack` and `pack` assume a buffer of at least `LEN` bytes; processors
/// go through the `_slice` variants, which check the exact length first.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Deserialize from a byte slice of at least `LEN` bytes.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice of at least `LEN` bytes.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A compact optional type with a fixed on-chain layout.
///
/// ```text
/// COption<Pubkey>: 36 bytes
/// [tag: 4 bytes, little-endian u32][value: 32 bytes]
///
/// Tag = 0: None (value bytes are zeros)
/// Tag = 1: Some (value bytes contain the Pubkey)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// SHARED FIELD CODECS
// =============================================================================

/// Unpack a `COption<Pubkey>` from `[tag: 4][pubkey: 32]`.
pub(crate) fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

/// Pack a `COption<Pubkey>` into `[tag: 4][pubkey: 32]`, zeroing the body for None.
pub(crate) fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];

    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

/// Unpack a length-prefixed string from `[len: 4][bytes: N]`.
///
/// A stored length larger than the buffer, or bytes that are not UTF-8,
/// mean the record is corrupt.
pub(crate) fn unpack_fixed_str(len: &[u8; 4], body: &[u8]) -> Result<String, ProgramError> {
    let len = u32::from_le_bytes(*len) as usize;
    if len > body.len() {
        return Err(ProgramError::InvalidAccountData);
    }
    String::from_utf8(body[..len].to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

/// Pack a string into `[len: 4][bytes: N]`, zero-padding the tail.
pub(crate) fn pack_fixed_str(
    src: &str,
    len_dst: &mut [u8; 4],
    body_dst: &mut [u8],
) -> Result<(), ProgramError> {
    let bytes = src.as_bytes();
    if bytes.len() > body_dst.len() {
        return Err(TokenMintError::ValidationError.into());
    }
    *len_dst = (bytes.len() as u32).to_le_bytes();
    body_dst[..bytes.len()].copy_from_slice(bytes);
    body_dst[bytes.len()..].fill(0);
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coption_conversions() {
        let key = Pubkey::new_unique();
        let copt: COption<Pubkey> = Some(key).into();
        assert!(copt.is_some());
        assert_eq!(Option::<Pubkey>::from(copt), Some(key));

        let empty: COption<Pubkey> = None.into();
        assert!(empty.is_none());
    }

    #[test]
    fn test_coption_pubkey_bad_tag() {
        let mut src = [0u8; 36];
        src[0] = 2;
        assert_eq!(
            unpack_coption_pubkey(&src),
            Err(ProgramError::InvalidAccountData)
        );
    }

    #[test]
    fn test_fixed_str_pads_and_restores() {
        let mut len = [0u8; 4];
        let mut body = [0xffu8; 10];
        pack_fixed_str("MAT", &mut len, &mut body).unwrap();

        assert_eq!(u32::from_le_bytes(len), 3);
        assert_eq!(&body[3..], &[0u8; 7]);
        assert_eq!(unpack_fixed_str(&len, &body).unwrap(), "MAT");
    }

    #[test]
    fn test_fixed_str_rejects_oversized() {
        let mut len = [0u8; 4];
        let mut body = [0u8; 4];
        assert_eq!(
            pack_fixed_str("TOOLONG", &mut len, &mut body),
            Err(TokenMintError::ValidationError.into())
        );
    }

    #[test]
    fn test_fixed_str_rejects_corrupt_length() {
        let len = 11u32.to_le_bytes();
        let body = [0u8; 10];
        assert!(unpack_fixed_str(&len, &body).is_err());
    }
}
