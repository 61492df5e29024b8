use clap::Parser;
use lldpscan_client::SnmpSession;
use lldpscan_core::types::Oid;
use lldpscan_tools::{print_cells, session_config, VersionArg};
use lldpscan_transport::address::DEFAULT_PORT;
use lldpscan_transport::AgentAddress;

#[derive(Parser, Debug)]
#[command(name = "snmpget")]
struct Args {
    #[arg(long)]
    target: String,
    #[arg(long, default_value = "public")]
    community: String,
    #[arg(long, value_enum, default_value = "v2c")]
    version: VersionArg,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
    #[arg(long, default_value_t = 1)]
    retries: u32,
    #[arg(long)]
    json: bool,
    /// Instances to fetch, e.g. `1.0.8802.1.1.2.1.3.3.0`.
    #[arg(required = true)]
    oids: Vec<Oid>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let address = AgentAddress::resolve(&args.target, args.port).await?;
    let config = session_config(args.version, args.timeout_secs, args.retries, 1);
    let session = SnmpSession::connect(address, &args.community, config).await?;

    let cells = session.get(&args.oids).await?;
    print_cells(&cells, args.json)?;
    Ok(())
}
