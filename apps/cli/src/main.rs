use blocksquare_tvl_cli::{config::Config, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    let balances = run(&config).await?;
    println!("{}", serde_json::to_string_pretty(&balances)?);
    Ok(())
}
