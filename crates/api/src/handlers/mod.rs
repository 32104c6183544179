pub mod policy;

pub use policy::serve_policy;
