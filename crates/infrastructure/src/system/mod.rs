pub mod nameserver;

pub use nameserver::{ResolvConfNameserver, StaticNameserver};
