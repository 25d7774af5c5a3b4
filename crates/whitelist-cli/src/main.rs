use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use shared::chain::contracts::constants::addresses::network;
use shared::chain::contracts::core::builder::ContractBuilder;
use shared::chain::wallet::Wallet;
use starknet::core::types::Felt;
use url::Url;

#[derive(Parser)]
#[command(about = "Submit a batch of add_white_list calls as one transaction")]
struct Args {
    /// Account address to whitelist (repeat for a batch; hex or decimal)
    #[arg(short = 'a', long = "address", required = true)]
    addresses: Vec<String>,

    /// Private key for transaction signing
    #[arg(short = 'k', long)]
    key: String,

    /// Account contract address of the signer
    #[arg(short = 's', long)]
    account: String,

    /// RPC URL
    #[arg(short = 'r', long, default_value = network::DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Maximum fee in wei
    #[arg(short = 'm', long, default_value = "1000000000000000")]
    max_fee: u128,

    /// Whitelist contract address override
    #[arg(long)]
    contract: Option<String>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => anyhow::bail!("invalid log level: {}", args.log_level),
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let addresses = args
        .addresses
        .iter()
        .map(|value| parse_felt(value))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let wallet = Wallet::new(
        &args.key,
        &args.account,
        Url::parse(&args.rpc_url)?,
        network::CHAIN_ID,
    )?;

    let builder = match &args.contract {
        Some(address) => ContractBuilder::new().with_whitelist_at(parse_felt(address)?),
        None => ContractBuilder::new().with_whitelist(),
    };
    let contracts = builder.build()?;

    let max_fee = Felt::from(args.max_fee);

    // Preflight only; submission proceeds either way and the network has
    // the final say on fees.
    match wallet.get_fee_token_balance().await {
        Ok((low, high)) => {
            if high == Felt::ZERO && low < max_fee {
                log::warn!("fee token balance {low:#x} is below the fee ceiling {max_fee:#x}");
            }
        }
        Err(err) => log::warn!("could not read fee token balance: {err}"),
    }

    let tx_hash = contracts
        .whitelist
        .add_white_list(&wallet, &addresses, max_fee)
        .await?;

    println!("tx_hash {tx_hash:#x}");

    Ok(())
}

fn parse_felt(value: &str) -> anyhow::Result<Felt> {
    Felt::from_str(value).map_err(|err| anyhow::anyhow!("invalid address {value:?}: {err}"))
}
