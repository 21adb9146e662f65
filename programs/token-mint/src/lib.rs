//! # Token Mint Program
//!
//! Creates fungible token mints with attached metadata and mints supply to
//! per-owner holder accounts.
//!
//! ## Overview
//!
//! The program keeps everything it needs in accounts it owns:
//! - A data account, created once, that every later instruction requires
//! - Mints, each created together with a metadata record (name, symbol, URI)
//! - Holder accounts, one per (owner, mint) pair at a derived address,
//!   created on first mint
//!
//! ## Account Types
//!
//! | Account Type | Size | Address |
//! |--------------|------|---------|
//! | DataAccount | 41 bytes | Keypair |
//! | Mint | 82 bytes | Keypair |
//! | Metadata | 319 bytes | `["metadata", program_id, mint]` |
//! | Account | 73 bytes | `[owner, program_id, mint]` |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | Initialize | Create the program data account |
//! | 1 | CreateTokenMint | Create a mint and its metadata |
//! | 2 | MintTo | Mint to the owner's holder account, creating it if needed |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Derived address helpers for metadata and holder accounts
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures
pub mod state;

/// Validation, allocation and amount helpers
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::TokenMintError;
pub use instruction::TokenMintInstruction;
pub use pda::{find_holder_address, find_metadata_address, get_holder_address};
pub use processor::Processor;
pub use state::{Account, DataAccount, Metadata, Mint, Pack};
pub use utils::ui_amount_to_amount;

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
