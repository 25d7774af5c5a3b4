use starknet::core::types::Felt;

use crate::chain::contracts::{
    constants::addresses::WHITELIST_CONTRACT_ADDRESS, core::error::ContractError,
    implementations::whitelist_contract::WhitelistContract,
};

#[derive(Clone)]
pub struct Contracts {
    pub whitelist: WhitelistContract,
}

#[derive(Default)]
pub struct ContractBuilder {
    whitelist: Option<WhitelistContract>,
}

impl ContractBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the whitelist contract at its default deployment.
    pub fn with_whitelist(self) -> Self {
        self.with_whitelist_at(WHITELIST_CONTRACT_ADDRESS)
    }

    /// Registers the whitelist contract at a custom address.
    pub fn with_whitelist_at(mut self, address: Felt) -> Self {
        self.whitelist = Some(WhitelistContract::new(address));
        self
    }

    pub fn build(self) -> Result<Contracts, ContractError> {
        Ok(Contracts {
            whitelist: match self.whitelist {
                Some(whitelist) => whitelist,
                None => return Err(ContractError::Other("Whitelist not initialized".into())),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starknet::macros::felt;

    #[test]
    fn build_without_whitelist_fails() {
        assert!(ContractBuilder::new().build().is_err());
    }

    #[test]
    fn build_uses_default_deployment() {
        let contracts = ContractBuilder::new().with_whitelist().build().unwrap();
        assert_eq!(contracts.whitelist.address(), WHITELIST_CONTRACT_ADDRESS);
    }

    #[test]
    fn build_honors_address_override() {
        let contracts = ContractBuilder::new()
            .with_whitelist_at(felt!("0xdead"))
            .build()
            .unwrap();
        assert_eq!(contracts.whitelist.address(), felt!("0xdead"));
    }
}
