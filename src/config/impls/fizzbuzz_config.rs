use crate::config::structs::fizzbuzz_config::FizzBuzzConfig;

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self {
            max_limit: 1_000_000,
        }
    }
}
