use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FizzBuzzConfig {
    /// Largest `limit` a single request may ask for.
    pub max_limit: u64,
}
