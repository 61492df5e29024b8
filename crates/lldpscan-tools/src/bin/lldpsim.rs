use clap::Parser;
use lldpscan_tools::demo_switch;
use lldpscan_transport::UdpTransport;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "lldpsim")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:1161")]
    bind: SocketAddr,
    #[arg(long, default_value = "public")]
    community: String,
    /// Reported local system name.
    #[arg(long, default_value = "sim-switch")]
    name: String,
    /// Number of LLDP neighbors to expose.
    #[arg(long, default_value_t = 3)]
    neighbors: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let transport = UdpTransport::bind(args.bind).await?;
    let agent = demo_switch(&args.community, &args.name, args.neighbors);

    println!(
        "Simulated LLDP agent {} on {} ({} neighbors, {} instances). Ctrl+C to stop.",
        args.name,
        transport.local_addr()?,
        args.neighbors,
        agent.len()
    );
    agent.run(&transport).await?;
    Ok(())
}
