use clap::Parser;
use lldpscan_client::SnmpSession;
use lldpscan_core::types::Oid;
use lldpscan_tools::{print_cells, session_config, VersionArg};
use lldpscan_transport::address::DEFAULT_PORT;
use lldpscan_transport::AgentAddress;

#[derive(Parser, Debug)]
#[command(name = "snmpwalk")]
struct Args {
    /// `host`, `ip` or `host:port`.
    #[arg(long)]
    target: String,
    #[arg(long, default_value = "public")]
    community: String,
    /// Subtree to walk.
    #[arg(long, default_value = "1.0.8802.1.1.2.1.4.1")]
    root: Oid,
    #[arg(long, value_enum, default_value = "v2c")]
    version: VersionArg,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
    #[arg(long, default_value_t = 1)]
    retries: u32,
    #[arg(long, default_value_t = 10)]
    max_repetitions: u32,
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let address = AgentAddress::resolve(&args.target, args.port).await?;
    let config = session_config(
        args.version,
        args.timeout_secs,
        args.retries,
        args.max_repetitions,
    );
    let session = SnmpSession::connect(address, &args.community, config).await?;

    match session.walk(&args.root).await {
        Ok(cells) => print_cells(&cells, args.json)?,
        Err(e) => {
            eprintln!("walk failed: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}
