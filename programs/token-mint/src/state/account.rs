//! Holder Token Account State
//!
//! One balance record per (owner, mint) pair, living at the associated
//! address derived in [`crate::pda::find_holder_address`]. MintTo creates it
//! on first use and credits it afterwards.

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Holder token account.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌───────────────────────────────────────────┐
/// │ Offset │ Size │ Field          │ Type     │
/// ├────────┼──────┼────────────────┼──────────┤
/// │ 0      │ 32   │ mint           │ Pubkey   │
/// │ 32     │ 32   │ owner          │ Pubkey   │
/// │ 64     │ 8    │ amount         │ u64      │
/// │ 72     │ 1    │ is_initialized │ bool     │
/// └───────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Account {
    /// The mint this account holds. Fixed at creation.
    pub mint: Pubkey,

    /// The wallet this balance belongs to. Fixed at creation.
    pub owner: Pubkey,

    /// Balance in the mint's smallest unit.
    pub amount: u64,

    pub is_initialized: bool,
}

impl Account {
    /// A zero-balance record for `(owner, mint)`.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        Self {
            mint,
            owner,
            amount: 0,
            is_initialized: true,
        }
    }
}

impl Pack for Account {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, is_initialized) = array_refs![input, 32, 32, 8, 1];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Account {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            is_initialized,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, is_initialized_dst) =
            mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        is_initialized_dst[0] = self.is_initialized as u8;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_empty_and_initialized() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let account = Account::new(mint, owner);

        assert!(account.is_initialized);
        assert_eq!(account.amount, 0);
        assert_eq!(account.mint, mint);
        assert_eq!(account.owner, owner);
    }

    #[test]
    fn test_account_layout() {
        let mut account = Account::new(Pubkey::new_unique(), Pubkey::new_unique());
        account.amount = 42;

        let mut packed = [0u8; Account::LEN];
        account.pack(&mut packed).unwrap();

        assert_eq!(&packed[0..32], account.mint.as_ref());
        assert_eq!(&packed[32..64], account.owner.as_ref());
        assert_eq!(&packed[64..72], &42u64.to_le_bytes());
        assert_eq!(packed[72], 1);
        assert_eq!(Account::unpack_from_slice(&packed).unwrap(), account);
    }

    #[test]
    fn test_zeroed_account_is_uninitialized() {
        let account = Account::unpack(&[0u8; Account::LEN]).unwrap();
        assert!(!account.is_initialized);
    }
}
