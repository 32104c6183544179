//! MTA-STS Responder Infrastructure Layer
pub mod dns;
