use crate::policy::{PolicyMode, PolicyTemplate, DEFAULT_MAX_AGE};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub mode: PolicyMode,

    #[serde(default = "default_max_age")]
    pub max_age: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            mode: PolicyMode::default(),
            max_age: default_max_age(),
        }
    }
}

impl PolicyConfig {
    pub fn template(&self) -> PolicyTemplate {
        PolicyTemplate::new(self.mode, self.max_age)
    }
}

fn default_max_age() -> u64 {
    DEFAULT_MAX_AGE
}
