use lldpscan_client::{
    poll_targets, PollConfig, SessionConfig, SimulatedAgent, SnmpSession, TargetSpec,
};
use lldpscan_core::lldp::mib;
use lldpscan_core::types::{Oid, Value};
use lldpscan_transport::{AgentAddress, UdpTransport};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

fn loopback() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
}

fn column(arcs: &[u32], index: &[u32]) -> Oid {
    let mut all = arcs.to_vec();
    all.extend_from_slice(index);
    Oid::new(all)
}

fn switch(name: &str, neighbors: u32) -> SimulatedAgent {
    let mut agent = SimulatedAgent::new("public")
        .with(Oid::from_slice(mib::LLDP_LOC_SYS_NAME), Value::from(name))
        .with(Oid::from_slice(mib::SYS_DESCR), Value::from("Simulated switch"));
    for n in 1..=neighbors {
        let index = [100, n, 1];
        agent.insert(
            column(mib::LLDP_REM_CHASSIS_ID, &index),
            Value::OctetString(vec![0x02, 0, 0, 0, 0, n as u8]),
        );
        agent.insert(
            column(mib::LLDP_REM_PORT_ID, &index),
            Value::from(format!("eth{n}").as_str()),
        );
        agent.insert(
            column(mib::LLDP_REM_SYS_NAME, &index),
            Value::from(format!("{name}-peer-{n}").as_str()),
        );
    }
    agent
}

async fn spawn_agent(agent: SimulatedAgent) -> SocketAddr {
    let transport = UdpTransport::bind(loopback()).await.unwrap();
    let addr = transport.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = agent.run(&transport).await;
    });
    addr
}

#[tokio::test]
async fn session_walks_simulated_agent_over_udp() {
    let _ = env_logger::builder().is_test(true).try_init();
    let addr = spawn_agent(switch("sw1", 30)).await;

    let config = SessionConfig {
        max_repetitions: 7,
        ..SessionConfig::default()
    };
    let session = SnmpSession::connect(AgentAddress::Udp(addr), "public", config)
        .await
        .unwrap();
    let cells = session
        .walk(&Oid::from_slice(mib::LLDP_REM_TABLE))
        .await
        .unwrap();
    assert_eq!(cells.len(), 90);
    assert!(cells.windows(2).all(|w| w[0].oid < w[1].oid));
}

#[tokio::test]
async fn poll_targets_keeps_input_order_and_skips_failures() {
    let _ = env_logger::builder().is_test(true).try_init();
    let a = spawn_agent(switch("sw-a", 2)).await;
    let b = spawn_agent(switch("sw-b", 1)).await;
    // Bound but never answers.
    let silent = UdpSocket::bind(loopback()).await.unwrap();
    let silent_addr = silent.local_addr().unwrap();

    let targets = vec![
        TargetSpec::new(b.to_string(), "public"),
        TargetSpec::new(silent_addr.to_string(), "public"),
        TargetSpec::new(a.to_string(), "public"),
        TargetSpec::new(a.to_string(), "wrong-community"),
    ];
    let config = PollConfig {
        session: SessionConfig {
            timeout: Duration::from_millis(200),
            retries: 0,
            ..SessionConfig::default()
        },
        concurrency: 2,
        ..PollConfig::default()
    };

    let reports = poll_targets(&targets, &config).await;
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].target, b.to_string());
    assert_eq!(reports[0].local.get(mib::LOCAL_SYSTEM_NAME).unwrap(), "sw-b");
    assert_eq!(reports[0].remote.len(), 1);
    assert_eq!(reports[1].target, a.to_string());
    assert_eq!(reports[1].remote.len(), 2);
    assert_eq!(reports[1].remote[1].get(mib::REMOTE_SYSTEM_NAME).unwrap(), "sw-a-peer-2");
    assert_eq!(reports[1].remote[1].index.to_string(), "100.2.1");
    drop(silent);
}
