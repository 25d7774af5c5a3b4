pub mod whitelist_contract;
