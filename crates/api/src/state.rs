use mta_sts_application::use_cases::ServePolicyUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub serve_policy: Arc<ServePolicyUseCase>,
}
