use std::thread::available_parallelism;
use crate::config::structs::http_server_config::HttpServerConfig;

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            keep_alive: 120,
            request_timeout: 5,
            disconnect_timeout: 10,
            max_connections: 25000,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
        }
    }
}
