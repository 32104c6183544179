use mta_sts_application::use_cases::ServePolicyUseCase;
use mta_sts_domain::Config;
use mta_sts_infrastructure::dns::DohJsonResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct UseCases {
    pub serve_policy: Arc<ServePolicyUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = config.resolver.query_timeout.map(Duration::from_secs);
        let resolver = Arc::new(DohJsonResolver::new(config.resolver.url.clone(), timeout)?);

        info!(
            resolver = %config.resolver.url,
            mode = %config.policy.mode,
            max_age = config.policy.max_age,
            "Policy responder configured"
        );

        Ok(Self {
            serve_policy: Arc::new(ServePolicyUseCase::new(
                resolver,
                config.policy.template(),
            )),
        })
    }
}
