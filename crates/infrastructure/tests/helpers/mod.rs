#![allow(dead_code)]
mod builders;
mod dns_server_mock;

pub use builders::{decode_question_name, CountingConnector, FixedNameserver, ResponseBuilder};
pub use dns_server_mock::{MockBehavior, MockDnsServer};
