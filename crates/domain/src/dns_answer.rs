//! JSON answer format of DNS-over-HTTPS resolvers (`application/dns-json`).
//!
//! Only the fields the responder reads are modelled; anything else the
//! resolver sends (`TC`, `RD`, `Question`, ...) is ignored on deserialization.

use crate::DomainError;
use serde::Deserialize;

/// RR type code of MX records.
pub const MX_RECORD_TYPE: u16 = 15;

/// RCODE reported by the resolver for a successful query (NOERROR).
const NOERROR: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsAnswer {
    #[serde(rename = "Status")]
    pub status: u32,

    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<AnswerRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: Option<u32>,

    /// Only read for MX records; other record types may omit it.
    #[serde(default)]
    pub data: String,
}

impl DnsAnswer {
    pub fn is_success(&self) -> bool {
        self.status == NOERROR
    }

    /// MX records of the answer section, in the order the resolver returned
    /// them. An absent answer section yields an empty list.
    pub fn mx_records(&self) -> Result<Vec<MxRecord>, DomainError> {
        self.answer
            .iter()
            .flatten()
            .filter(|record| record.record_type == MX_RECORD_TYPE)
            .map(|record| MxRecord::parse(&record.data))
            .collect()
    }
}

impl AnswerRecord {
    pub fn new(record_type: u16, data: impl Into<String>) -> Self {
        Self {
            name: None,
            record_type,
            ttl: None,
            data: data.into(),
        }
    }
}

/// An MX answer parsed from its presentation form `"<preference> <exchange>"`.
///
/// The preference token is kept verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub preference: String,
    pub exchange: String,
}

impl MxRecord {
    pub fn parse(data: &str) -> Result<Self, DomainError> {
        let mut fields = data.split(' ');

        let preference = fields.next().unwrap_or_default();

        let exchange = fields.next().ok_or_else(|| {
            DomainError::MalformedAnswer(format!("missing MX exchange in '{}'", data))
        })?;

        Ok(Self {
            preference: preference.to_string(),
            exchange: exchange.to_string(),
        })
    }

    /// Exchange host with its final character, the root-label dot, removed.
    pub fn host(&self) -> &str {
        let mut chars = self.exchange.chars();
        chars.next_back();
        chars.as_str()
    }
}
