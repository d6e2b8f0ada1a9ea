#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock upstream does when asked about a name.
#[derive(Clone)]
pub enum MockReply {
    Answer(Vec<Record>),
    Rcode(ResponseCode),
    /// Never reply, so the client times out.
    Silent,
    /// Reply with an id that does not match the query.
    WrongId,
}

/// Scripted authoritative server on loopback. Names without a script are
/// answered with REFUSED.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(script: Vec<(&str, MockReply)>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let script: HashMap<String, MockReply> = script
            .into_iter()
            .map(|(name, reply)| (name.to_string(), reply))
            .collect();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        let Some(name) = query.queries().first().map(|q| q.name().to_ascii()) else {
                            continue;
                        };
                        log.lock().unwrap().push(name.clone());

                        let reply = script
                            .get(&name)
                            .cloned()
                            .unwrap_or(MockReply::Rcode(ResponseCode::Refused));
                        if let Some(bytes) = Self::build_reply(&query, reply) {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `host:port` in the form the exchanger hands to the transport.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    fn build_reply(query: &Message, reply: MockReply) -> Option<Vec<u8>> {
        let id = match reply {
            MockReply::Silent => return None,
            MockReply::WrongId => query.id().wrapping_add(1),
            _ => query.id(),
        };

        let mut response = Message::new(id, MessageType::Response, query.op_code());
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        response.add_queries(query.queries().to_vec());
        match reply {
            MockReply::Answer(records) => {
                response.set_response_code(ResponseCode::NoError);
                response.add_answers(records);
            }
            MockReply::Rcode(rcode) => {
                response.set_response_code(rcode);
            }
            MockReply::Silent | MockReply::WrongId => {}
        }

        let mut buf = Vec::with_capacity(512);
        response.emit(&mut BinEncoder::new(&mut buf)).ok()?;
        Some(buf)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        ttl,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}
