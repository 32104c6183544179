//! MTA-STS policy documents (RFC 8461 §3.2).

use crate::{DnsAnswer, DomainError, MailDomain};
use serde::Deserialize;
use std::fmt;

pub const POLICY_VERSION: &str = "STSv1";

pub const DEFAULT_MAX_AGE: u64 = 1_209_600;

/// Largest `max_age` a policy may advertise (about one year).
pub const MAX_MAX_AGE: u64 = 31_557_600;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    #[default]
    Enforce,

    Testing,

    None,
}

impl PolicyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enforce => "enforce",
            Self::Testing => "testing",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed part of every policy served: version, mode and max age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTemplate {
    pub mode: PolicyMode,
    pub max_age: u64,
}

impl Default for PolicyTemplate {
    fn default() -> Self {
        Self {
            mode: PolicyMode::Enforce,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl PolicyTemplate {
    pub fn new(mode: PolicyMode, max_age: u64) -> Self {
        Self { mode, max_age }
    }

    pub fn header(&self) -> String {
        format!(
            "version: {}\nmode: {}\nmax_age: {}\n",
            POLICY_VERSION, self.mode, self.max_age
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    pub template: PolicyTemplate,
    pub mx_hosts: Vec<String>,
}

impl PolicyDocument {
    pub fn render(&self) -> String {
        let mut text = self.template.header();
        for host in &self.mx_hosts {
            text.push_str("mx: ");
            text.push_str(host);
            text.push('\n');
        }
        text
    }
}

/// What the responder answers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    Policy(PolicyDocument),

    /// The resolver answered but the domain has no MX records.
    NoMxRecords(MailDomain),

    /// The resolver reported a non-zero status (SERVFAIL, NXDOMAIN, ...).
    ResolverFailed(MailDomain),
}

impl PolicyOutcome {
    /// Builds the outcome for `domain` from the resolver's answer.
    ///
    /// MX preference is ignored: hosts are listed in the order the resolver
    /// returned them.
    pub fn from_answer(
        domain: MailDomain,
        answer: &DnsAnswer,
        template: PolicyTemplate,
    ) -> Result<Self, DomainError> {
        if !answer.is_success() {
            return Ok(Self::ResolverFailed(domain));
        }

        let mx_records = answer.mx_records()?;
        if mx_records.is_empty() {
            return Ok(Self::NoMxRecords(domain));
        }

        Ok(Self::Policy(PolicyDocument {
            template,
            mx_hosts: mx_records.iter().map(|mx| mx.host().to_string()).collect(),
        }))
    }

    pub fn body(&self) -> String {
        match self {
            Self::Policy(document) => document.render(),
            Self::NoMxRecords(domain) => format!("No MX records found for {}", domain),
            Self::ResolverFailed(domain) => {
                format!("Error while fetching MX records for {}", domain)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Policy(_) => "policy",
            Self::NoMxRecords(_) => "no_mx_records",
            Self::ResolverFailed(_) => "resolver_failed",
        }
    }
}
