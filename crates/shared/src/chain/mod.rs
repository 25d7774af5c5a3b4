pub mod contracts;
pub mod wallet;

pub use contracts::core::builder::Contracts;
pub use wallet::{CallExecutor, Wallet};
