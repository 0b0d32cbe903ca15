use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HttpServerConfig {
    pub bind_address: String,
    /// Idle keep-alive, in seconds.
    pub keep_alive: u64,
    /// Time allowed to receive the request head, in seconds.
    pub request_timeout: u64,
    /// Time allowed to flush the response before the connection is dropped, in seconds.
    pub disconnect_timeout: u64,
    pub max_connections: u64,
    pub threads: u64,
}
