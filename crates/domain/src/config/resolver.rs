use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// DNS-over-HTTPS endpoint speaking the `application/dns-json` format.
    #[serde(default = "default_resolver_url")]
    pub url: String,

    /// Upper bound in seconds for one MX lookup. Unset means no timeout.
    #[serde(default)]
    pub query_timeout: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            url: default_resolver_url(),
            query_timeout: None,
        }
    }
}

fn default_resolver_url() -> String {
    "https://1.1.1.1/dns-query".to_string()
}
