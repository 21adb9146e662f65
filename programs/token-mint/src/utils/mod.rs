//! Utility Modules
//!
//! Helpers shared by the instruction processors.
//!
//! - `assertions`: account checks (ownership, signer, size, derivation)
//! - `authority`: mint authority validation
//! - `system`: system-program allocation CPIs
//! - `amount`: caller-side scaling of whole tokens to smallest units

pub mod amount;
pub mod assertions;
pub mod authority;
pub mod system;

pub use amount::*;
pub use assertions::*;
pub use authority::*;
pub use system::*;
