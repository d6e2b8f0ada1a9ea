pub mod mock_transport;

pub use mock_transport::{a_record, response, MockUpstreamTransport};
