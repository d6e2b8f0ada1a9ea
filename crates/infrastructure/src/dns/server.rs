use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use dnsproxy_application::use_cases::HandleDnsQueryUseCase;
use dnsproxy_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns one inbound datagram into one reply datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode `packet`, resolve its first question and encode the reply.
    ///
    /// Returns `None` when the datagram is not a decodable query; the
    /// caller drops it without answering. Opcodes other than QUERY get an
    /// empty NOTIMP reply and never reach the resolver.
    pub async fn handle_packet(&self, packet: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, bytes = packet.len(), "Dropping undecodable DNS message");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            warn!(id = request.id(), "Dropping DNS message that is not a query");
            return None;
        }

        if request.op_code() != OpCode::Query {
            warn!(
                id = request.id(),
                op_code = ?request.op_code(),
                "Refusing unsupported opcode"
            );
            let mut response = Self::build_response(&request, Vec::new());
            response.set_response_code(ResponseCode::NotImp);
            return Self::encode(&response);
        }

        let questions = Self::questions(&request);
        let answer = self.use_case.execute(&questions).await;
        let response = Self::build_response(&request, answer.records);

        debug!(
            id = response.id(),
            answers = response.answers().len(),
            "Sending response"
        );

        Self::encode(&response)
    }

    fn encode(response: &Message) -> Option<Vec<u8>> {
        match MessageBuilder::serialize_message(response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = response.id(), "Failed to encode response");
                None
            }
        }
    }

    fn questions(request: &Message) -> Vec<DnsQuery> {
        request
            .queries()
            .iter()
            .map(|query| {
                DnsQuery::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect()
    }

    /// Authoritative NOERROR reply echoing the request's id, opcode, RD flag
    /// and question section. Resolution failures only show as an empty
    /// answer section.
    pub fn build_response(request: &Message, answers: Vec<Record>) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_authoritative(true);
        response.set_recursion_desired(request.recursion_desired());
        response.set_response_code(ResponseCode::NoError);
        response.add_queries(request.queries().to_vec());
        response.add_answers(answers);
        response
    }
}
