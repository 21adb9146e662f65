//! Amount Scaling
//!
//! MintTo takes amounts in the mint's smallest unit. Scaling whole tokens by
//! `10^decimals` is the caller's job; the program credits exactly what it is
//! given.

use crate::error::TokenMintError;
use solana_program::program_error::ProgramError;

/// Convert a whole-token amount into smallest units.
///
/// ```ignore
/// // 100 tokens of a 9-decimal mint
/// assert_eq!(ui_amount_to_amount(100, 9)?, 100_000_000_000);
/// ```
///
/// # Errors
///
/// Returns `Overflow` if the result does not fit in a `u64`.
pub fn ui_amount_to_amount(ui_amount: u64, decimals: u8) -> Result<u64, ProgramError> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| ui_amount.checked_mul(scale))
        .ok_or_else(|| TokenMintError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_by_decimals() {
        assert_eq!(ui_amount_to_amount(100, 9).unwrap(), 100_000_000_000);
        assert_eq!(ui_amount_to_amount(7, 0).unwrap(), 7);
        assert_eq!(ui_amount_to_amount(0, 9).unwrap(), 0);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            ui_amount_to_amount(u64::MAX, 1),
            Err(TokenMintError::Overflow.into())
        );
        // 10^20 does not fit in a u64
        assert_eq!(
            ui_amount_to_amount(1, 20),
            Err(TokenMintError::Overflow.into())
        );
    }
}
