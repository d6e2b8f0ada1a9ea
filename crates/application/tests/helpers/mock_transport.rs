#![allow(dead_code)]

use async_trait::async_trait;
use dnsproxy_application::ports::UpstreamTransport;
use dnsproxy_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

const RESPONSE_ID: u16 = 4242;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCall {
    pub server: String,
    pub domain: String,
    pub record_type: RecordType,
}

/// Scripted upstream: answers per queried domain, records every call.
/// Domains without a script fail at the transport level.
#[derive(Clone, Default)]
pub struct MockUpstreamTransport {
    responses: Arc<RwLock<HashMap<String, Result<Message, DomainError>>>>,
    calls: Arc<RwLock<Vec<TransportCall>>>,
}

impl MockUpstreamTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, domain: &str, message: Message) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Ok(message));
    }

    pub fn answer(&self, domain: &str, records: Vec<Record>) {
        self.respond(domain, response(ResponseCode::NoError, records));
    }

    pub fn nxdomain(&self, domain: &str) {
        self.respond(domain, response(ResponseCode::NXDomain, vec![]));
    }

    pub fn fail_with(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.domain).collect()
    }
}

#[async_trait]
impl UpstreamTransport for MockUpstreamTransport {
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        self.calls.write().unwrap().push(TransportCall {
            server: server.to_string(),
            domain: domain.to_string(),
            record_type,
        });

        self.responses
            .read()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::transport(server, "no response")))
    }
}

pub fn response(rcode: ResponseCode, answers: Vec<Record>) -> Message {
    let mut message = Message::new(RESPONSE_ID, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.set_response_code(rcode);
    for record in answers {
        message.add_answer(record);
    }
    message
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        ttl,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}
