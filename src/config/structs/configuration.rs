use serde::{Deserialize, Serialize};
use crate::config::structs::fizzbuzz_config::FizzBuzzConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub fizzbuzz_config: FizzBuzzConfig,
    pub http_server: HttpServerConfig,
    pub sentry_config: SentryConfig,
}
