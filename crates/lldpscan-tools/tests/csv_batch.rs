use lldpscan_client::{poll_targets, PollConfig, SessionConfig};
use lldpscan_tools::{demo_switch, read_targets, write_reports};
use lldpscan_transport::UdpTransport;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

async fn spawn_switch(name: &str, neighbors: u32) -> SocketAddr {
    let transport = UdpTransport::bind(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0))
        .await
        .unwrap();
    let addr = transport.local_addr().unwrap();
    let agent = demo_switch("public", name, neighbors);
    tokio::spawn(async move {
        let _ = agent.run(&transport).await;
    });
    addr
}

#[tokio::test]
async fn input_csv_to_output_csv() {
    let _ = env_logger::builder().is_test(true).try_init();
    let edge = spawn_switch("edge", 2).await;

    let input = format!("{edge},public\nnot-a-row\n");
    let targets = read_targets(input.as_bytes()).unwrap();
    assert_eq!(targets.len(), 1);

    let config = PollConfig {
        session: SessionConfig {
            timeout: Duration::from_secs(1),
            ..SessionConfig::default()
        },
        ..PollConfig::default()
    };
    let reports = poll_targets(&targets, &config).await;

    let mut out = Vec::new();
    write_reports(&mut out, &reports).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Type,Target,Neighbor,Index,Description,Value");
    assert_eq!(lines[1], format!("Local,{edge},,,Local Chassis ID,02005e005301"));
    assert!(lines.contains(&format!("Local,{edge},,,Local System Name,edge").as_str()));
    assert!(lines.contains(
        &format!("Local,{edge},,,System Vendor,.1.3.6.1.4.1.8072.3.2.10").as_str()
    ));
    assert!(lines.contains(
        &format!("Remote,{edge},1,0.1.1,Remote Chassis ID,02005e100001").as_str()
    ));
    assert!(lines.contains(
        &format!("Remote,{edge},2,0.2.1,Remote System Name,neighbor-2").as_str()
    ));
    assert!(lines.contains(
        &format!("Remote,{edge},2,0.2.1,Remote System Capabilities,2800").as_str()
    ));
    assert!(lines.contains(
        &format!("Remote,{edge},1,0.1.1,Remote Management Address,2").as_str()
    ));
    // 5 local fields and 6 fields for each of the 2 neighbors.
    assert_eq!(lines.len(), 1 + 5 + 12);
}
