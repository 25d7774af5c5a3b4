use starknet::core::types::Felt;
use starknet::macros::felt;

/// Whitelist contract deployed on Starknet mainnet.
pub const WHITELIST_CONTRACT_ADDRESS: Felt =
    felt!("0x6d2f4cf10eec1ebfb54f5cb6e9ab48e3ea442a2812576decd73814779afa57e");

/// ETH fee token (same address on mainnet and Sepolia).
pub const ETH_FEE_TOKEN_ADDRESS: Felt =
    felt!("0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7");

// TODO: Parse these from env
#[cfg(not(feature = "testnet"))]
pub mod network {
    use starknet::core::chain_id;
    use starknet::core::types::Felt;

    pub const DEFAULT_RPC_URL: &str =
        "https://starknet-mainnet.g.alchemy.com/v2/JnR9OZ0EoYZTyhz91Kko2UkLLZ1jH7Eu";
    pub const CHAIN_ID: Felt = chain_id::MAINNET;
}

#[cfg(feature = "testnet")]
pub mod network {
    use starknet::core::chain_id;
    use starknet::core::types::Felt;

    pub const DEFAULT_RPC_URL: &str = "https://starknet-sepolia.public.blastapi.io/rpc/v0_7";
    pub const CHAIN_ID: Felt = chain_id::SEPOLIA;
}

pub use network::*;
