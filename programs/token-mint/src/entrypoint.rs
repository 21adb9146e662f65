//! Program Entrypoint
//!
//! Where the Solana runtime calls into the program. Failed instructions log
//! their decoded error before the transaction is rolled back.

// =============================================================================
// CONDITIONAL COMPILATION
// =============================================================================

// Programs depending on this crate build it with "no-entrypoint"
#![cfg(not(feature = "no-entrypoint"))]

// =============================================================================
// IMPORTS
// =============================================================================

use crate::{error::TokenMintError, processor::Processor};
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

// =============================================================================
// ENTRYPOINT DECLARATION
// =============================================================================

entrypoint!(process_instruction);

// =============================================================================
// ENTRYPOINT FUNCTION
// =============================================================================

/// The main entrypoint for the token-mint program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program
/// * `accounts` - Accounts involved in this instruction
/// * `instruction_data` - Raw instruction bytes (see `instruction.rs` for layout)
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<TokenMintError>();
        return Err(error);
    }
    Ok(())
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

ERROR LOGGING
=============

ProgramError::Custom(6) alone tells a user very little. print() looks the
code up through FromPrimitive and writes the message to the program log:

    Program log: Instruction: CreateTokenMint
    Program log: Error: Address does not match its deterministic derivation

Non-custom errors (MissingRequiredSignature, InvalidAccountData, ...) are
printed by their own Display text.

THE FLOW
========

User Transaction
     │
     ▼
process_instruction()
     │
     ▼
Processor::process()      decode TokenMintInstruction, route
     │
     ├── initialize::process
     ├── create_token_mint::process
     └── mint_to::process
*/
