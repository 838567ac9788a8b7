pub mod hostent;
pub mod lookup;
pub mod strerror;
