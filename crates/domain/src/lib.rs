//! MTA-STS Responder Domain Layer
pub mod config;
pub mod dns_answer;
pub mod errors;
pub mod mail_domain;
pub mod policy;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_answer::{AnswerRecord, DnsAnswer, MxRecord, MX_RECORD_TYPE};
pub use errors::DomainError;
pub use mail_domain::MailDomain;
pub use policy::{PolicyDocument, PolicyMode, PolicyOutcome, PolicyTemplate};
