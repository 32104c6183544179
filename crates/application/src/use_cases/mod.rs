pub mod policy;

pub use policy::ServePolicyUseCase;
