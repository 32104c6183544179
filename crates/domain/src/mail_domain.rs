use std::fmt;
use std::sync::Arc;

/// The domain whose MX records back the policy served for a request host.
///
/// Derivation strips exactly one leading label when the host has more than
/// two labels. It is not public-suffix aware: `mta-sts.example.co.uk` derives
/// `example.co.uk`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MailDomain(Arc<str>);

impl MailDomain {
    pub fn from_host(host: &str) -> Self {
        let host = strip_port(host);
        let labels: Vec<&str> = host.split('.').collect();

        if labels.len() > 2 {
            Self(labels[1..].join(".").into())
        } else {
            Self(host.into())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MailDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Drops a trailing `:port` from an authority. Bracketed IPv6 literals keep
/// their colons.
fn strip_port(host: &str) -> &str {
    if let Some(end) = host.rfind(']') {
        return &host[..=end];
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
