//! Instruction Processors
//!
//! Business logic for each instruction, one file per instruction.

pub mod create_token_mint;
pub mod initialize;
pub mod mint_to;

use crate::instruction::TokenMintInstruction;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a token-mint program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = TokenMintInstruction::unpack(instruction_data)?;

        match instruction {
            TokenMintInstruction::Initialize => {
                msg!("Instruction: Initialize");
                initialize::process(program_id, accounts)
            }

            TokenMintInstruction::CreateTokenMint {
                freeze_authority,
                decimals,
                name,
                symbol,
                uri,
            } => {
                msg!("Instruction: CreateTokenMint");
                create_token_mint::process(
                    program_id,
                    accounts,
                    freeze_authority,
                    decimals,
                    name,
                    symbol,
                    uri,
                )
            }

            TokenMintInstruction::MintTo { amount } => {
                msg!("Instruction: MintTo");
                mint_to::process(program_id, accounts, amount)
            }
        }
    }
}
