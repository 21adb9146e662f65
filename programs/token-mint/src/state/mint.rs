//! Mint Account State
//!
//! A Mint is the identity of one fungible-asset class. It records who may
//! create new supply, who may freeze holders, the display scale, and the
//! total supply in smallest units.
//!
//! # Size: 82 bytes (same layout as SPL Token, so explorers can read it)

use crate::state::{pack_coption_pubkey, unpack_coption_pubkey, COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Highest decimals value CreateTokenMint accepts.
pub const MAX_DECIMALS: u8 = 9;

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 36   │ freeze_authority │ COption<Pubkey>             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The identity allowed to call MintTo. `None` fixes supply forever.
    pub mint_authority: COption<Pubkey>,

    /// Total tokens in existence, in smallest units.
    ///
    /// Invariant: equals the sum of every holder account's `amount` for
    /// this mint. Only MintTo changes it, and only upward.
    pub supply: u64,

    /// Fixed-point scale. Set once at creation, never changed.
    ///
    /// ```text
    /// smallest_units = whole_tokens * 10^decimals
    /// ```
    pub decimals: u8,

    /// Set by CreateTokenMint. A zeroed account reads as `false`.
    pub is_initialized: bool,

    /// The identity allowed to freeze holder accounts, if any.
    pub freeze_authority: COption<Pubkey>,
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_bytes,
            supply_bytes,
            decimals_bytes,
            is_initialized_bytes,
            freeze_authority_bytes,
        ) = array_refs![input, 36, 8, 1, 1, 36];

        let is_initialized = match is_initialized_bytes[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Mint {
            mint_authority: unpack_coption_pubkey(mint_authority_bytes)?,
            supply: u64::from_le_bytes(*supply_bytes),
            decimals: decimals_bytes[0],
            is_initialized,
            freeze_authority: unpack_coption_pubkey(freeze_authority_bytes)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_dst,
            supply_dst,
            decimals_dst,
            is_initialized_dst,
            freeze_authority_dst,
        ) = mut_array_refs![output, 36, 8, 1, 1, 36];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        pack_coption_pubkey(&self.freeze_authority, freeze_authority_dst);

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_layout_offsets() {
        let authority = Pubkey::new_unique();
        let mint = Mint {
            mint_authority: COption::some(authority),
            supply: 100_000_000_000,
            decimals: 9,
            is_initialized: true,
            freeze_authority: COption::none(),
        };

        let mut packed = [0u8; Mint::LEN];
        mint.pack(&mut packed).unwrap();

        assert_eq!(&packed[0..4], &1u32.to_le_bytes());
        assert_eq!(&packed[4..36], authority.as_ref());
        assert_eq!(&packed[36..44], &100_000_000_000u64.to_le_bytes());
        assert_eq!(packed[44], 9);
        assert_eq!(packed[45], 1);
        assert_eq!(&packed[46..82], &[0u8; 36]);

        assert_eq!(Mint::unpack(&packed).unwrap(), mint);
    }

    /// A freshly allocated (zeroed) account is not an initialized mint.
    #[test]
    fn test_mint_uninitialized() {
        let mint = Mint::unpack(&[0u8; Mint::LEN]).unwrap();

        assert!(!mint.is_initialized);
        assert!(mint.mint_authority.is_none());
        assert_eq!(mint.supply, 0);
    }

    #[test]
    fn test_mint_wrong_size() {
        assert!(Mint::unpack_from_slice(&[0u8; 81]).is_err());
        assert!(Mint::unpack_from_slice(&[0u8; 83]).is_err());
    }

    #[test]
    fn test_mint_invalid_initialized_flag() {
        let mut packed = [0u8; Mint::LEN];
        packed[45] = 7;
        assert_eq!(Mint::unpack(&packed), Err(ProgramError::InvalidAccountData));
    }
}
