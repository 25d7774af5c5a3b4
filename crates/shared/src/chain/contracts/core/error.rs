use starknet::core::utils::NonAsciiNameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid entry point name: {0}")]
    EntryPointName(#[from] NonAsciiNameError),
    #[error("{0}")]
    Other(String),
}
