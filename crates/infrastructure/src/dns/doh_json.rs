//! MX lookups over DNS-over-HTTPS, JSON flavour
//!
//! Sends one HTTP GET per lookup with the query encoded in the URL and reads
//! back the resolver's JSON answer (the `application/dns-json` API offered by
//! Cloudflare, Google and others).
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?name=example.com&type=MX HTTP/1.1
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use mta_sts_application::ports::MxResolver;
use mta_sts_domain::{DnsAnswer, DomainError, MailDomain};
use std::time::Duration;
use tracing::debug;

const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DNS-over-HTTPS JSON resolver
pub struct DohJsonResolver {
    url: String,
    client: reqwest::Client,
}

impl DohJsonResolver {
    /// `timeout` bounds the whole exchange; `None` leaves it unbounded.
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(4);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            DomainError::ConfigError(format!("Failed to build DoH client for {}: {}", url, e))
        })?;

        Ok(Self { url, client })
    }

}

#[async_trait]
impl MxResolver for DohJsonResolver {
    async fn lookup_mx(&self, domain: &MailDomain) -> Result<DnsAnswer, DomainError> {
        debug!(url = %self.url, domain = %domain, "Sending DoH MX query");

        let response = self
            .client
            .get(&self.url)
            .query(&[("name", domain.as_str()), ("type", "MX")])
            .header("Accept", DNS_JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                DomainError::ResolverTransport(format!(
                    "DoH request to {} {}: {}",
                    self.url, kind, e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ResolverTransport(format!(
                "DoH server {} returned HTTP {}: {}",
                self.url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            DomainError::ResolverTransport(format!(
                "Failed to read DoH response from {}: {}",
                self.url, e
            ))
        })?;

        let answer: DnsAnswer = serde_json::from_slice(&body).map_err(|e| {
            DomainError::MalformedAnswer(format!("Invalid JSON from {}: {}", self.url, e))
        })?;

        debug!(
            url = %self.url,
            domain = %domain,
            dns_status = answer.status,
            answer_len = answer.answer.as_ref().map_or(0, Vec::len),
            "DoH response received"
        );

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_creation() {
        let resolver = DohJsonResolver::new("https://1.1.1.1/dns-query".to_string(), None).unwrap();
        assert_eq!(resolver.url, "https://1.1.1.1/dns-query");
    }

    #[test]
    fn test_resolver_google() {
        let resolver = DohJsonResolver::new(
            "https://dns.google/resolve".to_string(),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(resolver.url, "https://dns.google/resolve");
    }
}
