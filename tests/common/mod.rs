#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use fizzbuzz_actix::config::structs::configuration::Configuration;
use fizzbuzz_actix::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;
use fizzbuzz_actix::http::structs::http_service_data::HttpServiceData;
use fizzbuzz_actix::stats::structs::stats_tracker::StatsTracker;

pub type TestTracker = Arc<StatsTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.http_server.bind_address = "127.0.0.1:0".to_string();
    config.http_server.threads = 1;
    config.fizzbuzz_config.max_limit = 10_000;
    Arc::new(config)
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(StatsTracker::new())
}

pub fn create_test_service_data(tracker: TestTracker) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        stats_tracker: tracker,
        config: create_test_config(),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn classic_params() -> FizzBuzzParams {
    FizzBuzzParams::new(3, 5, 15, "Fizz", "Buzz")
}

pub fn fizzbuzz_uri(params: &FizzBuzzParams) -> String {
    format!(
        "/fizzbuzz?int1={}&int2={}&limit={}&str1={}&str2={}",
        params.int1, params.int2, params.limit, params.str1, params.str2
    )
}
