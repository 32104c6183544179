use async_trait::async_trait;
use mta_sts_domain::{DnsAnswer, DomainError, MailDomain};

/// Source of MX answers for a mail domain.
///
/// Implementations issue exactly one query per call. A resolver-level failure
/// (SERVFAIL, NXDOMAIN) is reported through `DnsAnswer::status`, not as an
/// error; `Err` is reserved for transport and decoding faults.
#[async_trait]
pub trait MxResolver: Send + Sync {
    async fn lookup_mx(&self, domain: &MailDomain) -> Result<DnsAnswer, DomainError>;
}
