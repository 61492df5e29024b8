use clap::Parser;
use lldpscan_client::{poll_targets, PollConfig};
use lldpscan_core::lldp::TableProfile;
use lldpscan_tools::{
    load_profile, read_targets_file, session_config, write_reports, write_reports_json,
    GroupingArg, VersionArg,
};
use lldpscan_transport::address::DEFAULT_PORT;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lldppoll", about = "Poll LLDP neighbor tables over SNMP")]
struct Args {
    /// CSV of `target,community` rows.
    #[arg(long, default_value = "input.csv")]
    input: PathBuf,
    #[arg(long, default_value = "lldp_info.csv")]
    output: PathBuf,
    #[arg(long, value_enum, default_value = "v2c")]
    version: VersionArg,
    /// Port for targets that do not name one.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
    #[arg(long, default_value_t = 1)]
    retries: u32,
    #[arg(long, default_value_t = 10)]
    max_repetitions: u32,
    #[arg(long, default_value_t = 8)]
    concurrency: usize,
    #[arg(long, value_enum, default_value = "index-suffix")]
    grouping: GroupingArg,
    /// JSON table profile replacing the built-in LLDP-MIB labels.
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Write JSON instead of CSV.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let targets = read_targets_file(&args.input)?;
    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => TableProfile::default(),
    };
    let config = PollConfig {
        session: session_config(
            args.version,
            args.timeout_secs,
            args.retries,
            args.max_repetitions,
        ),
        port: args.port,
        concurrency: args.concurrency,
        grouping: args.grouping.into_policy(),
        profile,
    };

    let reports = poll_targets(&targets, &config).await;
    let out = BufWriter::new(File::create(&args.output)?);
    if args.json {
        write_reports_json(out, &reports)?;
    } else {
        write_reports(out, &reports)?;
    }
    info!(
        "LLDP information for {} of {} targets successfully written to {}",
        reports.len(),
        targets.len(),
        args.output.display()
    );
    Ok(())
}
