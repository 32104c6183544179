use mta_sts_domain::{DomainError, MailDomain, PolicyOutcome, PolicyTemplate};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::MxResolver;

/// Builds the MTA-STS policy for the host a request was addressed to.
pub struct ServePolicyUseCase {
    resolver: Arc<dyn MxResolver>,
    template: PolicyTemplate,
}

impl ServePolicyUseCase {
    pub fn new(resolver: Arc<dyn MxResolver>, template: PolicyTemplate) -> Self {
        Self { resolver, template }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, host: &str) -> Result<PolicyOutcome, DomainError> {
        let domain = MailDomain::from_host(host);
        let answer = self.resolver.lookup_mx(&domain).await?;

        if !answer.is_success() {
            warn!(domain = %domain, status = answer.status, "Resolver reported failure");
        }

        let outcome = PolicyOutcome::from_answer(domain, &answer, self.template)?;
        debug!(outcome = outcome.as_str(), "Policy outcome");

        Ok(outcome)
    }
}
