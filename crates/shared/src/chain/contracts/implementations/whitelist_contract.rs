use starknet::core::types::{Call, Felt};

use crate::chain::contracts::core::{contract::Contract, error::ContractError};
use crate::chain::wallet::CallExecutor;

/// Entry point name on the deployed contract. The dispatch selector is
/// derived from this exact string.
pub const ADD_WHITE_LIST_ENTRY_POINT: &str = "add_white_list";

#[derive(Clone)]
pub struct WhitelistContract {
    instance: Contract,
}

impl WhitelistContract {
    pub fn new(address: Felt) -> Self {
        Self {
            instance: Contract::new(address),
        }
    }

    pub fn address(&self) -> Felt {
        self.instance.address()
    }

    /// Builds one `add_white_list` call per address, preserving input
    /// order. Duplicates and empty input pass through unchanged.
    pub fn add_white_list_calls(&self, addresses: &[Felt]) -> Result<Vec<Call>, ContractError> {
        addresses
            .iter()
            .map(|address| self.instance.call(ADD_WHITE_LIST_ENTRY_POINT, vec![*address]))
            .collect()
    }

    /// Submits the whole batch as a single invoke transaction under the
    /// given fee ceiling and returns the transaction hash. Errors from
    /// the executor propagate unmodified.
    pub async fn add_white_list<E: CallExecutor>(
        &self,
        executor: &E,
        addresses: &[Felt],
        max_fee: Felt,
    ) -> anyhow::Result<Felt> {
        let calls = self.add_white_list_calls(addresses)?;
        log::info!(
            "adding {} addresses to whitelist at {:#x}",
            calls.len(),
            self.address()
        );
        let resp = executor.execute_calls(calls, max_fee).await?;
        Ok(resp.transaction_hash)
    }
}
