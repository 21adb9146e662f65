//! Metadata Record State
//!
//! Human-readable description of a mint. The record lives at the address
//! derived from `("metadata", registry_id, mint)` and is created in the same
//! instruction as the mint it describes.
//!
//! # Size: 319 bytes

use crate::error::TokenMintError;
use crate::state::{pack_fixed_str, unpack_fixed_str, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Longest accepted token name, in bytes.
pub const MAX_NAME_LENGTH: usize = 32;

/// Longest accepted token symbol, in bytes.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Longest accepted metadata URI, in bytes.
pub const MAX_URI_LENGTH: usize = 200;

/// Check text fields against the registry limits.
///
/// Lengths are measured in UTF-8 bytes, which is what gets stored.
pub fn validate_metadata_fields(name: &str, symbol: &str, uri: &str) -> Result<(), ProgramError> {
    if name.len() > MAX_NAME_LENGTH
        || symbol.len() > MAX_SYMBOL_LENGTH
        || uri.len() > MAX_URI_LENGTH
    {
        return Err(TokenMintError::ValidationError.into());
    }
    Ok(())
}

// =============================================================================
// METADATA STRUCTURE
// =============================================================================

/// Metadata record.
///
/// # Memory Layout (319 bytes total)
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                   │
/// ├────────┼──────┼──────────────────┼────────────────────────┤
/// │ 0      │ 1    │ is_initialized   │ bool                   │
/// │ 1      │ 32   │ update_authority │ Pubkey                 │
/// │ 33     │ 32   │ mint             │ Pubkey                 │
/// │ 65     │ 36   │ name             │ u32 len + [u8; 32]     │
/// │ 101    │ 14   │ symbol           │ u32 len + [u8; 10]     │
/// │ 115    │ 204  │ uri              │ u32 len + [u8; 200]    │
/// └──────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    pub is_initialized: bool,

    /// Identity allowed to change this record later.
    pub update_authority: Pubkey,

    /// The mint this record is permanently bound to.
    pub mint: Pubkey,

    pub name: String,
    pub symbol: String,

    /// Reference to richer off-chain metadata (usually JSON on IPFS/Arweave).
    pub uri: String,
}

impl Pack for Metadata {
    const LEN: usize = 1 + 32 + 32 + (4 + MAX_NAME_LENGTH) + (4 + MAX_SYMBOL_LENGTH) + (4 + MAX_URI_LENGTH);

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            is_initialized,
            update_authority,
            mint,
            name_len,
            name,
            symbol_len,
            symbol,
            uri_len,
            uri,
        ) = array_refs![
            input,
            1,
            32,
            32,
            4,
            MAX_NAME_LENGTH,
            4,
            MAX_SYMBOL_LENGTH,
            4,
            MAX_URI_LENGTH
        ];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Metadata {
            is_initialized,
            update_authority: Pubkey::new_from_array(*update_authority),
            mint: Pubkey::new_from_array(*mint),
            name: unpack_fixed_str(name_len, name)?,
            symbol: unpack_fixed_str(symbol_len, symbol)?,
            uri: unpack_fixed_str(uri_len, uri)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            is_initialized_dst,
            update_authority_dst,
            mint_dst,
            name_len_dst,
            name_dst,
            symbol_len_dst,
            symbol_dst,
            uri_len_dst,
            uri_dst,
        ) = mut_array_refs![
            output,
            1,
            32,
            32,
            4,
            MAX_NAME_LENGTH,
            4,
            MAX_SYMBOL_LENGTH,
            4,
            MAX_URI_LENGTH
        ];

        is_initialized_dst[0] = self.is_initialized as u8;
        update_authority_dst.copy_from_slice(self.update_authority.as_ref());
        mint_dst.copy_from_slice(self.mint.as_ref());
        pack_fixed_str(&self.name, name_len_dst, name_dst)?;
        pack_fixed_str(&self.symbol, symbol_len_dst, symbol_dst)?;
        pack_fixed_str(&self.uri, uri_len_dst, uri_dst)?;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata {
            is_initialized: true,
            update_authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            name: "My Awesome Token".to_string(),
            symbol: "MAT".to_string(),
            uri: "https://ipfs.io/ipfs/QmUdt2GvsxtYmBd9S2hAc5tCu2MWtDns9h8rQipSoSxGi1"
                .to_string(),
        }
    }

    #[test]
    fn test_metadata_len() {
        assert_eq!(Metadata::LEN, 319);
    }

    #[test]
    fn test_metadata_pack_unpack() {
        let original = sample();
        let mut packed = vec![0u8; Metadata::LEN];
        original.pack_into_slice(&mut packed).unwrap();

        // name length prefix sits right after the two keys
        assert_eq!(&packed[65..69], &16u32.to_le_bytes());
        assert_eq!(&packed[69..85], b"My Awesome Token");

        assert_eq!(Metadata::unpack_from_slice(&packed).unwrap(), original);
    }

    #[test]
    fn test_pack_rejects_oversized_symbol() {
        let mut metadata = sample();
        metadata.symbol = "A".repeat(MAX_SYMBOL_LENGTH + 1);
        let mut packed = vec![0u8; Metadata::LEN];
        assert_eq!(
            metadata.pack(&mut packed),
            Err(TokenMintError::ValidationError.into())
        );
    }

    #[test]
    fn test_validate_metadata_fields_limits() {
        let name = "N".repeat(MAX_NAME_LENGTH);
        let symbol = "S".repeat(MAX_SYMBOL_LENGTH);
        let uri = "u".repeat(MAX_URI_LENGTH);
        assert!(validate_metadata_fields(&name, &symbol, &uri).is_ok());

        let long_name = "N".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_metadata_fields(&long_name, &symbol, &uri),
            Err(TokenMintError::ValidationError.into())
        );

        let long_uri = "u".repeat(MAX_URI_LENGTH + 1);
        assert_eq!(
            validate_metadata_fields(&name, &symbol, &long_uri),
            Err(TokenMintError::ValidationError.into())
        );
    }

    #[test]
    fn test_validate_counts_utf8_bytes() {
        // 11 two-byte characters = 22 bytes, over the 10-byte symbol limit
        let symbol = "é".repeat(11);
        assert!(validate_metadata_fields("ok", &symbol, "").is_err());
    }
}
