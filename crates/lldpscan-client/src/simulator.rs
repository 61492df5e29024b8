//! Lightweight simulated SNMP agent.
//!
//! [`SimulatedAgent`] answers Get, GetNext and GetBulk requests from an
//! in-memory MIB. Useful for testing and development without a switch.

use crate::ClientError;
use lldpscan_core::message::{ErrorStatus, Message, Pdu, PduType, SnmpVersion};
use lldpscan_core::types::{Oid, Value, VarBind};
use lldpscan_core::EncodeError;
use lldpscan_transport::Transport;
use log::debug;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Upper bound on GetBulk repetitions served per request.
const MAX_BULK_REPETITIONS: usize = 256;

/// A simulated community-based SNMP agent.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAgent {
    community: Vec<u8>,
    mib: BTreeMap<Oid, Value>,
}

impl SimulatedAgent {
    pub fn new(community: impl AsRef<[u8]>) -> Self {
        Self {
            community: community.as_ref().to_vec(),
            mib: BTreeMap::new(),
        }
    }

    /// Adds or replaces one instance.
    pub fn insert(&mut self, oid: Oid, value: Value) {
        self.mib.insert(oid, value);
    }

    pub fn with(mut self, oid: Oid, value: Value) -> Self {
        self.insert(oid, value);
        self
    }

    pub fn len(&self) -> usize {
        self.mib.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mib.is_empty()
    }

    /// Serves requests arriving on `transport` until it fails.
    pub async fn run<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        let mut buf = vec![0u8; 65_535];
        loop {
            let (n, source) = transport.recv(&mut buf).await?;
            if let Some(reply) = self.handle_request(&buf[..n]) {
                transport.send(source, &reply).await?;
            }
        }
    }

    /// Builds the response to one request datagram.
    ///
    /// Returns `None` for anything an agent would drop silently: undecodable
    /// frames, a wrong community, non-request PDUs and GetBulk on v1.
    pub fn handle_request(&self, frame: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::decode(frame) {
            Ok(message) => message,
            Err(e) => {
                debug!("simulator: dropping undecodable request: {e}");
                return None;
            }
        };
        if request.community != self.community {
            debug!("simulator: dropping request with unknown community");
            return None;
        }

        let version = request.version;
        let pdu = request.pdu;
        let response = match pdu.pdu_type {
            PduType::GetRequest => self.respond(version, &pdu, |oid| self.get(version, oid)),
            PduType::GetNextRequest => self.respond(version, &pdu, |oid| self.next(oid)),
            PduType::GetBulkRequest if version == SnmpVersion::V2c => self.bulk(&pdu),
            _ => return None,
        };

        match Message::new(version, &request.community, response).to_bytes() {
            Ok(bytes) => Some(bytes),
            Err(EncodeError::MessageTooLarge) => {
                let mut too_big = Pdu::response(pdu.request_id, Vec::new());
                too_big.error_status = ErrorStatus::TooBig.to_i32();
                Message::new(version, &request.community, too_big)
                    .to_bytes()
                    .ok()
            }
            Err(e) => {
                debug!("simulator: cannot encode response: {e}");
                None
            }
        }
    }

    fn get(&self, version: SnmpVersion, oid: &Oid) -> Option<Value> {
        if let Some(value) = self.mib.get(oid) {
            return Some(value.clone());
        }
        match version {
            SnmpVersion::V1 => None,
            SnmpVersion::V2c => {
                let object = &oid.arcs()[..oid.len().saturating_sub(1)];
                let known_object = self
                    .mib
                    .keys()
                    .any(|k| k.arcs().starts_with(object) && k.len() > object.len());
                Some(if known_object {
                    Value::NoSuchInstance
                } else {
                    Value::NoSuchObject
                })
            }
        }
    }

    fn successor(&self, oid: &Oid) -> Option<(&Oid, &Value)> {
        self.mib
            .range((Bound::Excluded(oid), Bound::Unbounded))
            .next()
    }

    /// GetNext lookup; `None` past the last instance.
    fn next(&self, oid: &Oid) -> Option<VarBind> {
        self.successor(oid)
            .map(|(k, v)| VarBind::new(k.clone(), v.clone()))
    }

    /// Answers Get and GetNext. On v1 the first unresolvable varbind turns
    /// the whole response into `noSuchName`; on v2c it becomes an exception
    /// value in place.
    fn respond<F, R>(&self, version: SnmpVersion, pdu: &Pdu, mut lookup: F) -> Pdu
    where
        F: FnMut(&Oid) -> Option<R>,
        R: IntoVarBind,
    {
        let mut varbinds = Vec::with_capacity(pdu.varbinds.len());
        for (i, requested) in pdu.varbinds.iter().enumerate() {
            match lookup(&requested.oid) {
                Some(found) => varbinds.push(found.into_varbind(&requested.oid)),
                None if version == SnmpVersion::V1 => {
                    let mut error = Pdu::response(pdu.request_id, pdu.varbinds.clone());
                    error.error_status = ErrorStatus::NoSuchName.to_i32();
                    error.error_index = i as i32 + 1;
                    return error;
                }
                None => varbinds.push(VarBind::new(requested.oid.clone(), Value::EndOfMibView)),
            }
        }
        Pdu::response(pdu.request_id, varbinds)
    }

    fn bulk(&self, pdu: &Pdu) -> Pdu {
        let non_repeaters = (pdu.non_repeaters().max(0) as usize).min(pdu.varbinds.len());
        let max_repetitions = (pdu.max_repetitions().max(0) as usize).min(MAX_BULK_REPETITIONS);
        let end_of_view = |oid: &Oid| VarBind::new(oid.clone(), Value::EndOfMibView);

        let mut varbinds = Vec::new();
        for requested in &pdu.varbinds[..non_repeaters] {
            varbinds.push(
                self.next(&requested.oid)
                    .unwrap_or_else(|| end_of_view(&requested.oid)),
            );
        }

        let mut cursors: Vec<Oid> = pdu.varbinds[non_repeaters..]
            .iter()
            .map(|vb| vb.oid.clone())
            .collect();
        for _ in 0..max_repetitions {
            if cursors.is_empty() {
                break;
            }
            let mut exhausted = true;
            for cursor in &mut cursors {
                match self.next(cursor) {
                    Some(found) => {
                        *cursor = found.oid.clone();
                        varbinds.push(found);
                        exhausted = false;
                    }
                    None => varbinds.push(end_of_view(cursor)),
                }
            }
            if exhausted {
                break;
            }
        }
        Pdu::response(pdu.request_id, varbinds)
    }
}

trait IntoVarBind {
    fn into_varbind(self, requested: &Oid) -> VarBind;
}

impl IntoVarBind for Value {
    fn into_varbind(self, requested: &Oid) -> VarBind {
        VarBind::new(requested.clone(), self)
    }
}

impl IntoVarBind for VarBind {
    fn into_varbind(self, _requested: &Oid) -> VarBind {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::SimulatedAgent;
    use lldpscan_core::message::{ErrorStatus, Message, Pdu, SnmpVersion};
    use lldpscan_core::types::{Oid, Value};

    fn oid(s: &str) -> Oid {
        s.parse().unwrap()
    }

    fn agent() -> SimulatedAgent {
        SimulatedAgent::new("public")
            .with(oid("1.3.6.1.2.1.1.1.0"), Value::from("Linux"))
            .with(oid("1.3.6.1.2.1.1.5.0"), Value::from("switch-1"))
            .with(oid("1.3.6.1.2.1.2.1.0"), Value::Integer(2))
    }

    fn exchange(agent: &SimulatedAgent, version: SnmpVersion, pdu: Pdu) -> Pdu {
        let frame = Message::new(version, b"public", pdu).to_bytes().unwrap();
        Message::decode(&agent.handle_request(&frame).unwrap())
            .unwrap()
            .pdu
    }

    #[test]
    fn get_reports_missing_instances_by_version() {
        let agent = agent();
        let missing = [oid("1.3.6.1.2.1.1.1.0"), oid("1.3.6.1.2.1.1.1.1")];

        let v2 = exchange(&agent, SnmpVersion::V2c, Pdu::get(1, &missing));
        assert_eq!(v2.status(), ErrorStatus::NoError);
        assert_eq!(v2.varbinds[0].value, Value::from("Linux"));
        assert_eq!(v2.varbinds[1].value, Value::NoSuchInstance);

        let unknown = exchange(&agent, SnmpVersion::V2c, Pdu::get(2, &[oid("1.9.9.9")]));
        assert_eq!(unknown.varbinds[0].value, Value::NoSuchObject);

        let v1 = exchange(&agent, SnmpVersion::V1, Pdu::get(3, &missing));
        assert_eq!(v1.status(), ErrorStatus::NoSuchName);
        assert_eq!(v1.error_index, 2);
    }

    #[test]
    fn get_next_past_the_end() {
        let agent = agent();
        let v2 = exchange(
            &agent,
            SnmpVersion::V2c,
            Pdu::get_next(1, &[oid("1.3.6.1.2.1.2.1.0")]),
        );
        assert_eq!(v2.varbinds[0].value, Value::EndOfMibView);

        let v1 = exchange(
            &agent,
            SnmpVersion::V1,
            Pdu::get_next(2, &[oid("1.3.6.1.2.1.2.1.0")]),
        );
        assert_eq!(v1.status(), ErrorStatus::NoSuchName);
    }

    #[test]
    fn bulk_interleaves_repeaters_and_stops_when_exhausted() {
        let agent = agent();
        let pdu = Pdu::get_bulk(
            1,
            1,
            5,
            &[oid("1.3.6.1.2.1.1"), oid("1.3.6.1.2.1.1.1.0")],
        );
        let response = exchange(&agent, SnmpVersion::V2c, pdu);
        let oids: Vec<String> = response
            .varbinds
            .iter()
            .map(|vb| vb.oid.to_string())
            .collect();
        assert_eq!(
            oids,
            [
                "1.3.6.1.2.1.1.1.0",
                "1.3.6.1.2.1.1.5.0",
                "1.3.6.1.2.1.2.1.0",
                "1.3.6.1.2.1.2.1.0",
            ]
        );
        assert_eq!(response.varbinds[3].value, Value::EndOfMibView);
    }

    #[test]
    fn wrong_community_and_junk_are_dropped() {
        let agent = agent();
        let frame = Message::new(
            SnmpVersion::V2c,
            b"private",
            Pdu::get(1, &[oid("1.3.6.1.2.1.1.1.0")]),
        )
        .to_bytes()
        .unwrap();
        assert!(agent.handle_request(&frame).is_none());
        assert!(agent.handle_request(&[0x30, 0x01]).is_none());
    }
}
