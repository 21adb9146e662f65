//! Program Data Account State
//!
//! The program's execution context. Initialize allocates it once; every
//! later instruction requires it to be present and initialized.

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Data account record.
///
/// ```text
/// [0]      is_initialized (bool)
/// [1..33]  authority (Pubkey, the payer that ran Initialize)
/// [33..41] mints_created (u64)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataAccount {
    pub is_initialized: bool,

    /// Who paid for and initialized this context.
    pub authority: Pubkey,

    /// Number of mints created through this context.
    pub mints_created: u64,
}

impl Pack for DataAccount {
    const LEN: usize = 41;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, DataAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, authority, mints_created) = array_refs![input, 1, 32, 8];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(DataAccount {
            is_initialized,
            authority: Pubkey::new_from_array(*authority),
            mints_created: u64::from_le_bytes(*mints_created),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, DataAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, authority_dst, mints_created_dst) =
            mut_array_refs![output, 1, 32, 8];

        is_initialized_dst[0] = self.is_initialized as u8;
        authority_dst.copy_from_slice(self.authority.as_ref());
        *mints_created_dst = self.mints_created.to_le_bytes();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_account_pack_unpack() {
        let original = DataAccount {
            is_initialized: true,
            authority: Pubkey::new_unique(),
            mints_created: 3,
        };

        let mut packed = [0u8; DataAccount::LEN];
        original.pack_into_slice(&mut packed).unwrap();

        assert_eq!(packed[0], 1);
        assert_eq!(DataAccount::unpack_from_slice(&packed).unwrap(), original);
    }

    #[test]
    fn test_data_account_default_is_unready() {
        let state = DataAccount::unpack(&[0u8; DataAccount::LEN]).unwrap();
        assert!(!state.is_initialized);
        assert_eq!(state.mints_created, 0);
    }
}
