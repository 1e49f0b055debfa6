use anyhow::Context;
use clap::Parser;
use gen_pool::pool::{DEFAULT_POOL_MASK, DEFAULT_POOL_OFFSET};
use gen_pool::{Output, PoolParams};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "gen-pool")]
#[command(version)]
#[command(about = "Generate a CiliumLoadBalancerIPPool from kubectl nodes JSON", long_about = None)]
struct Cli {
    /// Path to JSON file containing nodes data (`kubectl get nodes -o json`).
    #[arg(long)]
    nodes: String,

    /// Name for the CiliumLoadBalancerIPPool resource.
    #[arg(long)]
    pool_name: String,

    /// Output file path (`-` for stdout).
    #[arg(short = 'o', long, default_value = gen_pool::output::STDOUT_SENTINEL)]
    output: Output,

    /// Fourth octet of the pool block.
    #[arg(long, default_value_t = DEFAULT_POOL_OFFSET)]
    pool_offset: u32,

    /// CIDR mask for the pool.
    #[arg(long, default_value_t = DEFAULT_POOL_MASK)]
    pool_mask: u32,

    /// Increase log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gen_pool::logging::init_tracing(cli.verbose)?;

    // 1) Read nodes JSON.
    let data =
        std::fs::read(&cli.nodes).with_context(|| format!("read nodes file {}", cli.nodes))?;

    // 2) Extract + derive + render.
    let params = PoolParams {
        offset: cli.pool_offset,
        mask: cli.pool_mask,
    };
    let manifest = gen_pool::generate(&data, &cli.pool_name, params).map_err(|err| {
        let stage = err.stage();
        anyhow::Error::new(err).context(stage)
    })?;

    // 3) Write.
    cli.output
        .write_all(&manifest)
        .with_context(|| format!("write pool manifest to {}", cli.output))?;
    tracing::info!(output = %cli.output, "wrote pool manifest");

    Ok(())
}
