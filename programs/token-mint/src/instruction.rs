//! Instruction Types
//!
//! This module defines the instructions the token-mint program accepts, their
//! wire format, and the caller-side builders that assemble them.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | Initialize |
//! | 1 | CreateTokenMint |
//! | 2 | MintTo |
//!
//! Strings are encoded as a `u32` little-endian byte length followed by
//! UTF-8 bytes. `Option<Pubkey>` is a `0`/`1` tag byte followed by 32 bytes
//! when present.

use crate::error::TokenMintError;
use crate::pda::{find_metadata_address, get_holder_address};
use crate::state::metadata::validate_metadata_fields;
use crate::state::mint::MAX_DECIMALS;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the token-mint program.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenMintInstruction {
    /// Allocate and initialize the program data account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds the allocation |
    /// | 1 | data_account | ✓ | ✓ | Fresh keypair account to initialize |
    /// | 2 | system_program | | | System program |
    Initialize,

    /// Create a mint and its metadata record in one step.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds both allocations |
    /// | 1 | data_account | ✓ | | Initialized program data account |
    /// | 2 | mint | ✓ | ✓ | Fresh keypair account for the mint |
    /// | 3 | metadata | ✓ | | Derived metadata address |
    /// | 4 | mint_authority | | | Recorded as mint and update authority |
    /// | 5 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1]: decimals (u8)
    /// [2]: freeze_authority_option (0 = None, 1 = Some)
    /// [3..35]: freeze_authority (Pubkey, if option = 1)
    /// then name, symbol, uri: [len: u32 LE][bytes]
    /// ```
    CreateTokenMint {
        freeze_authority: Option<Pubkey>,
        decimals: u8,
        name: String,
        symbol: String,
        uri: String,
    },

    /// Credit a holder's associated account, creating it on first use.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds the holder account if absent |
    /// | 1 | data_account | | | Initialized program data account |
    /// | 2 | mint | ✓ | | The mint |
    /// | 3 | token_account | ✓ | | Holder's associated account |
    /// | 4 | owner | | | Holder wallet |
    /// | 5 | mint_authority | | ✓ | Mint authority |
    /// | 6 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..9]: amount (u64, little-endian, smallest units)
    /// ```
    MintTo { amount: u64 },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl TokenMintInstruction {
    /// Parse instruction data.
    ///
    /// Trailing bytes after a complete instruction are rejected.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(TokenMintError::InvalidInstruction)?;

        let (instruction, rest) = match discriminant {
            0 => (TokenMintInstruction::Initialize, rest),

            1 => {
                let (&decimals, rest) = rest
                    .split_first()
                    .ok_or(TokenMintError::InvalidInstruction)?;
                let (freeze_authority, rest) = Self::unpack_pubkey_option(rest)?;
                let (name, rest) = Self::unpack_string(rest)?;
                let (symbol, rest) = Self::unpack_string(rest)?;
                let (uri, rest) = Self::unpack_string(rest)?;
                (
                    TokenMintInstruction::CreateTokenMint {
                        freeze_authority,
                        decimals,
                        name,
                        symbol,
                        uri,
                    },
                    rest,
                )
            }

            2 => {
                let (amount, rest) = Self::unpack_u64(rest)?;
                (TokenMintInstruction::MintTo { amount }, rest)
            }

            _ => return Err(TokenMintError::InvalidInstruction.into()),
        };

        if !rest.is_empty() {
            return Err(TokenMintError::InvalidInstruction.into());
        }
        Ok(instruction)
    }

    fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
        if input.len() < 8 {
            return Err(TokenMintError::InvalidInstruction.into());
        }
        let (amount, rest) = input.split_at(8);
        let amount = amount
            .try_into()
            .map(u64::from_le_bytes)
            .map_err(|_| TokenMintError::InvalidInstruction)?;
        Ok((amount, rest))
    }

    fn unpack_pubkey_option(input: &[u8]) -> Result<(Option<Pubkey>, &[u8]), ProgramError> {
        match input.split_first() {
            Some((&0, rest)) => Ok((None, rest)),
            Some((&1, rest)) if rest.len() >= 32 => {
                let (key, rest) = rest.split_at(32);
                let key = Pubkey::try_from(key).map_err(|_| TokenMintError::InvalidInstruction)?;
                Ok((Some(key), rest))
            }
            _ => Err(TokenMintError::InvalidInstruction.into()),
        }
    }

    fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
        if input.len() < 4 {
            return Err(TokenMintError::InvalidInstruction.into());
        }
        let (len, rest) = input.split_at(4);
        let len = len
            .try_into()
            .map(u32::from_le_bytes)
            .map_err(|_| TokenMintError::InvalidInstruction)? as usize;
        if rest.len() < len {
            return Err(TokenMintError::InvalidInstruction.into());
        }
        let (bytes, rest) = rest.split_at(len);
        let value =
            String::from_utf8(bytes.to_vec()).map_err(|_| TokenMintError::InvalidInstruction)?;
        Ok((value, rest))
    }

    // =========================================================================
    // INSTRUCTION PACKING
    // =========================================================================

    /// Pack instruction into bytes. Inverse of [`TokenMintInstruction::unpack`].
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            TokenMintInstruction::Initialize => {
                buf.push(0);
            }

            TokenMintInstruction::CreateTokenMint {
                freeze_authority,
                decimals,
                name,
                symbol,
                uri,
            } => {
                buf.push(1);
                buf.push(*decimals);
                match freeze_authority {
                    Some(authority) => {
                        buf.push(1);
                        buf.extend_from_slice(authority.as_ref());
                    }
                    None => buf.push(0),
                }
                for text in [name, symbol, uri] {
                    buf.extend_from_slice(&(text.len() as u32).to_le_bytes());
                    buf.extend_from_slice(text.as_bytes());
                }
            }

            TokenMintInstruction::MintTo { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build an Initialize instruction.
pub fn initialize(program_id: &Pubkey, payer: &Pubkey, data_account: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*data_account, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TokenMintInstruction::Initialize.pack(),
    }
}

/// Build a CreateTokenMint instruction.
///
/// The metadata address is derived here, with this program acting as the
/// registry. Text fields and decimals are validated before anything is
/// built, so an oversized name never reaches the ledger.
#[allow(clippy::too_many_arguments)]
pub fn create_token_mint(
    program_id: &Pubkey,
    payer: &Pubkey,
    data_account: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Result<Instruction, ProgramError> {
    validate_metadata_fields(name, symbol, uri)?;
    if decimals > MAX_DECIMALS {
        return Err(TokenMintError::ValidationError.into());
    }

    let (metadata, _) = find_metadata_address(mint, program_id);

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*data_account, false),
            AccountMeta::new(*mint, true),
            AccountMeta::new(metadata, false),
            AccountMeta::new_readonly(*mint_authority, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TokenMintInstruction::CreateTokenMint {
            freeze_authority: freeze_authority.copied(),
            decimals,
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .pack(),
    })
}

/// Build a MintTo instruction crediting `owner`'s associated account.
///
/// `amount` is in smallest units; see [`crate::utils::amount`] for scaling.
pub fn mint_to(
    program_id: &Pubkey,
    payer: &Pubkey,
    data_account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Instruction {
    let token_account = get_holder_address(owner, mint, program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*data_account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(token_account, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TokenMintInstruction::MintTo { amount }.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_mint_ix(freeze_authority: Option<Pubkey>) -> TokenMintInstruction {
        TokenMintInstruction::CreateTokenMint {
            freeze_authority,
            decimals: 9,
            name: "My Awesome Token".to_string(),
            symbol: "MAT".to_string(),
            uri: "https://ipfs.io/ipfs/QmUdt2GvsxtYmBd9S2hAc5tCu2MWtDns9h8rQipSoSxGi1".to_string(),
        }
    }

    #[test]
    fn test_create_token_mint_wire_layout() {
        let authority = Pubkey::new_unique();
        let packed = create_mint_ix(Some(authority)).pack();

        assert_eq!(packed[0], 1);
        assert_eq!(packed[1], 9);
        assert_eq!(packed[2], 1);
        assert_eq!(&packed[3..35], authority.as_ref());
        assert_eq!(&packed[35..39], &16u32.to_le_bytes());
        assert_eq!(&packed[39..55], b"My Awesome Token");

        assert_eq!(
            TokenMintInstruction::unpack(&packed).unwrap(),
            create_mint_ix(Some(authority))
        );
    }

    #[test]
    fn test_create_token_mint_without_freeze_authority() {
        let packed = create_mint_ix(None).pack();
        assert_eq!(packed[2], 0);
        assert_eq!(
            TokenMintInstruction::unpack(&packed).unwrap(),
            create_mint_ix(None)
        );
    }

    #[test]
    fn test_mint_to_layout() {
        let packed = TokenMintInstruction::MintTo {
            amount: 100_000_000_000,
        }
        .pack();
        assert_eq!(packed.len(), 9);
        assert_eq!(packed[0], 2);
        assert_eq!(
            TokenMintInstruction::unpack(&packed).unwrap(),
            TokenMintInstruction::MintTo {
                amount: 100_000_000_000
            }
        );
    }

    #[test]
    fn test_unpack_rejects_malformed_input() {
        let invalid: ProgramError = TokenMintError::InvalidInstruction.into();

        // empty, unknown discriminant, trailing bytes
        assert_eq!(TokenMintInstruction::unpack(&[]), Err(invalid.clone()));
        assert_eq!(TokenMintInstruction::unpack(&[3]), Err(invalid.clone()));
        assert_eq!(TokenMintInstruction::unpack(&[0, 0]), Err(invalid.clone()));

        // short amount
        assert_eq!(
            TokenMintInstruction::unpack(&[2, 1, 2, 3]),
            Err(invalid.clone())
        );

        // bad option tag
        assert_eq!(
            TokenMintInstruction::unpack(&[1, 9, 2]),
            Err(invalid.clone())
        );

        // string length past end of buffer
        let mut truncated = create_mint_ix(None).pack();
        truncated.truncate(truncated.len() - 1);
        assert_eq!(TokenMintInstruction::unpack(&truncated), Err(invalid.clone()));

        // invalid utf-8 in name
        let mut bad_utf8 = vec![1, 9, 0];
        bad_utf8.extend_from_slice(&1u32.to_le_bytes());
        bad_utf8.push(0xff);
        bad_utf8.extend_from_slice(&0u32.to_le_bytes());
        bad_utf8.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(TokenMintInstruction::unpack(&bad_utf8), Err(invalid));
    }

    #[test]
    fn test_builder_derives_metadata_address() {
        let program_id = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let data_account = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ix = create_token_mint(
            &program_id,
            &payer,
            &data_account,
            &mint,
            &payer,
            Some(&payer),
            9,
            "My Awesome Token",
            "MAT",
            "https://example.com/mat.json",
        )
        .unwrap();

        assert_eq!(ix.accounts[3].pubkey, find_metadata_address(&mint, &program_id).0);
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[4].is_signer);
    }

    #[test]
    fn test_builder_rejects_oversized_text_and_decimals() {
        let key = Pubkey::new_unique();
        let long_symbol = "S".repeat(11);

        assert_eq!(
            create_token_mint(&key, &key, &key, &key, &key, None, 9, "name", &long_symbol, "")
                .unwrap_err(),
            TokenMintError::ValidationError.into()
        );
        assert_eq!(
            create_token_mint(&key, &key, &key, &key, &key, None, 10, "name", "SYM", "")
                .unwrap_err(),
            TokenMintError::ValidationError.into()
        );
    }

    #[test]
    fn test_mint_to_builder_targets_holder_address() {
        let program_id = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ix = mint_to(
            &program_id,
            &authority,
            &Pubkey::new_unique(),
            &mint,
            &owner,
            &authority,
            5,
        );

        assert_eq!(
            ix.accounts[3].pubkey,
            get_holder_address(&owner, &mint, &program_id)
        );
        assert!(ix.accounts[5].is_signer);
    }
}
