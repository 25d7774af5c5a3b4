use std::str::FromStr;

use async_trait::async_trait;
use starknet::accounts::{Account, ConnectedAccount, ExecutionEncoding, SingleOwnerAccount};
use starknet::core::types::{
    BlockId, BlockTag, Call, Felt, FunctionCall, InvokeTransactionResult,
};
use starknet::macros::selector;
use starknet::providers::jsonrpc::{HttpTransport, JsonRpcClient};
use starknet::providers::{Provider, ProviderError};
use starknet::signers::{LocalWallet, SigningKey};
use thiserror::Error;
use url::Url;

use crate::chain::contracts::constants::addresses::ETH_FEE_TOKEN_ADDRESS;

pub type AccountClient = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid account address: {0}")]
    InvalidAccountAddress(String),
    #[error(transparent)]
    Rpc(#[from] ProviderError),
    #[error("unexpected balance response: {0}")]
    Balance(String),
}

/// Signing identity for one invocation: a Stark-curve signer bound to a
/// deployed account contract, plus the JSON-RPC provider it submits
/// through.
pub struct Wallet {
    pub signer: LocalWallet,
    pub account: AccountClient,
}

impl Wallet {
    pub fn new(
        private_key: &str,
        account_address: &str,
        rpc_url: Url,
        chain_id: Felt,
    ) -> Result<Self, WalletError> {
        let secret = Felt::from_str(private_key)
            .map_err(|err| WalletError::InvalidPrivateKey(err.to_string()))?;
        let address = Felt::from_str(account_address)
            .map_err(|err| WalletError::InvalidAccountAddress(err.to_string()))?;

        let signer = LocalWallet::from(SigningKey::from_secret_scalar(secret));
        let provider = JsonRpcClient::new(HttpTransport::new(rpc_url));
        let account = SingleOwnerAccount::new(
            provider,
            signer.clone(),
            address,
            chain_id,
            ExecutionEncoding::New,
        );

        Ok(Self { signer, account })
    }

    pub fn address(&self) -> Felt {
        self.account.address()
    }

    pub fn provider(&self) -> &JsonRpcClient<HttpTransport> {
        self.account.provider()
    }

    /// Reads the account's ETH fee token balance as the (low, high) words
    /// of the Uint256 returned by `balanceOf`.
    pub async fn get_fee_token_balance(&self) -> Result<(Felt, Felt), WalletError> {
        let request = FunctionCall {
            contract_address: ETH_FEE_TOKEN_ADDRESS,
            entry_point_selector: selector!("balanceOf"),
            calldata: vec![self.address()],
        };
        let result = self
            .provider()
            .call(request, BlockId::Tag(BlockTag::Pending))
            .await?;

        match result.as_slice() {
            [low, high, ..] => Ok((*low, *high)),
            _ => Err(WalletError::Balance(format!(
                "balanceOf returned {} felts, expected 2",
                result.len()
            ))),
        }
    }
}

/// Submission seam: anything that can sign and submit a batch of calls as
/// one invoke transaction under an explicit fee ceiling.
#[async_trait]
pub trait CallExecutor: Send + Sync {
    async fn execute_calls(
        &self,
        calls: Vec<Call>,
        max_fee: Felt,
    ) -> anyhow::Result<InvokeTransactionResult>;
}

#[async_trait]
impl CallExecutor for Wallet {
    async fn execute_calls(
        &self,
        calls: Vec<Call>,
        max_fee: Felt,
    ) -> anyhow::Result<InvokeTransactionResult> {
        log::debug!(
            "submitting invoke with {} calls, max fee {:#x}",
            calls.len(),
            max_fee
        );
        let result = self.account.execute_v1(calls).max_fee(max_fee).send().await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starknet::macros::felt;
    use starknet::signers::Signer;

    const TEST_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
    const TEST_ACCOUNT: &str = "0x0000000000000000000000000000000000000000000000000000000000000005";

    fn test_wallet(key: &str) -> Wallet {
        Wallet::new(
            key,
            TEST_ACCOUNT,
            Url::parse("http://localhost:5050").unwrap(),
            felt!("0x534e5f4d41494e"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn signer_is_deterministic_for_fixed_key() {
        let first = test_wallet(TEST_KEY);
        let second = test_wallet(TEST_KEY);

        let first_key = first.signer.get_public_key().await.unwrap().scalar();
        let second_key = second.signer.get_public_key().await.unwrap().scalar();
        assert_eq!(first_key, second_key);
        assert_eq!(first.address(), second.address());
    }

    #[tokio::test]
    async fn different_keys_produce_different_signers() {
        let first = test_wallet(TEST_KEY);
        let second = test_wallet(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
        );

        let first_key = first.signer.get_public_key().await.unwrap().scalar();
        let second_key = second.signer.get_public_key().await.unwrap().scalar();
        assert_ne!(first_key, second_key);
    }

    #[test]
    fn rejects_malformed_private_key() {
        let result = Wallet::new(
            "not-a-key",
            TEST_ACCOUNT,
            Url::parse("http://localhost:5050").unwrap(),
            felt!("0x534e5f4d41494e"),
        );
        assert!(matches!(result, Err(WalletError::InvalidPrivateKey(_))));
    }

    #[test]
    fn rejects_malformed_account_address() {
        let result = Wallet::new(
            TEST_KEY,
            "xyz",
            Url::parse("http://localhost:5050").unwrap(),
            felt!("0x534e5f4d41494e"),
        );
        assert!(matches!(result, Err(WalletError::InvalidAccountAddress(_))));
    }
}
