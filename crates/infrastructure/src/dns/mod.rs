pub mod doh_json;

pub use doh_json::DohJsonResolver;
