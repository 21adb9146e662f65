//! Deterministic Address Derivation
//!
//! Records tied to a mint live at addresses computed from seeds, never at
//! addresses the caller is free to choose:
//!
//! | Record | Seeds | Deriving program |
//! |--------|-------|------------------|
//! | Metadata | `"metadata"`, registry id, mint | registry |
//! | Holder account | owner, token program id, mint | token program |
//!
//! Both functions are pure. Handlers re-derive on every call and compare
//! against the supplied address before touching any record.

use solana_program::pubkey::Pubkey;

/// Seed prefix of every metadata record address.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Derive the metadata record address for `mint` under `registry_id`.
///
/// The registry id appears both as a seed and as the deriving program,
/// which is the layout token-metadata registries use.
pub fn find_metadata_address(mint: &Pubkey, registry_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, registry_id.as_ref(), mint.as_ref()],
        registry_id,
    )
}

/// Derive the associated holder account for `(owner, mint)`.
pub fn find_holder_address(owner: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[owner.as_ref(), program_id.as_ref(), mint.as_ref()],
        program_id,
    )
}

/// Address-only form of [`find_holder_address`], for clients.
pub fn get_holder_address(owner: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> Pubkey {
    find_holder_address(owner, mint, program_id).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_address_is_deterministic() {
        let registry = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let first = find_metadata_address(&mint, &registry);
        let second = find_metadata_address(&mint, &registry);
        assert_eq!(first, second);

        let expected = Pubkey::create_program_address(
            &[METADATA_SEED, registry.as_ref(), mint.as_ref(), &[first.1]],
            &registry,
        )
        .unwrap();
        assert_eq!(first.0, expected);
    }

    #[test]
    fn test_metadata_address_depends_on_mint_and_registry() {
        let registry = Pubkey::new_unique();
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        assert_ne!(
            find_metadata_address(&mint_a, &registry).0,
            find_metadata_address(&mint_b, &registry).0
        );
        assert_ne!(
            find_metadata_address(&mint_a, &registry).0,
            find_metadata_address(&mint_a, &Pubkey::new_unique()).0
        );
    }

    #[test]
    fn test_holder_address_per_owner_and_mint() {
        let program_id = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let address = get_holder_address(&owner, &mint, &program_id);
        assert_eq!(address, get_holder_address(&owner, &mint, &program_id));
        assert_ne!(
            address,
            get_holder_address(&Pubkey::new_unique(), &mint, &program_id)
        );
        assert_ne!(
            address,
            get_holder_address(&owner, &Pubkey::new_unique(), &program_id)
        );
        // derived addresses are off-curve, so no keypair can sign for them
        assert!(!address.is_on_curve());
    }
}
