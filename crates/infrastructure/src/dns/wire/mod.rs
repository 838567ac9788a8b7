//! DNS message codec for the A-record stub resolver (RFC 1035 §4).
//!
//! Only what a single IPv4 lookup needs: building one question, and walking
//! an untrusted response far enough to pull out the first A/IN answer.

mod error;
mod name;
mod packet;
mod query;
mod response;

pub use error::WireError;
pub use name::{skip_name, MAX_NAME_STEPS};
pub use packet::{
    PacketBuf, CLASS_IN, FLAGS_RECURSION_DESIRED, HEADER_LEN, MAX_LABEL_LEN, MAX_PACKET_SIZE,
    TYPE_A,
};
pub use query::encode_query;
pub use response::{parse_a_response, response_id};
