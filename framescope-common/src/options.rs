use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerOptions {
    #[serde(default = "default_seed")]
    pub sample_seed: u64,
    #[serde(default)]
    pub value_counts_limit: Option<usize>, // None keeps every distinct value
}

fn default_seed() -> u64 {
    0
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            sample_seed: default_seed(),
            value_counts_limit: None,
        }
    }
}
