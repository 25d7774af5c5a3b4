use starknet::core::types::{Call, Felt};
use starknet::core::utils::get_selector_from_name;

use crate::chain::contracts::core::error::ContractError;

/// Thin handle for a deployed contract: an address plus selector
/// derivation for its entry points.
#[derive(Clone, Debug)]
pub struct Contract {
    address: Felt,
}

impl Contract {
    pub fn new(address: Felt) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Felt {
        self.address
    }

    /// Derives the dispatch selector for a named entry point. The name
    /// must match the deployed contract's function name exactly.
    pub fn entry_point(&self, name: &str) -> Result<Felt, ContractError> {
        Ok(get_selector_from_name(name)?)
    }

    /// Builds one call against this contract, ready for inclusion in an
    /// invoke transaction.
    pub fn call(&self, entry_point: &str, calldata: Vec<Felt>) -> Result<Call, ContractError> {
        Ok(Call {
            to: self.address,
            selector: self.entry_point(entry_point)?,
            calldata,
        })
    }
}
