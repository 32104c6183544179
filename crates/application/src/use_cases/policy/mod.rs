mod serve_policy;

pub use serve_policy::ServePolicyUseCase;
