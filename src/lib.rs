//! # FizzBuzz Actix
//!
//! A small HTTP service built on Actix-web that generates parameterized
//! FizzBuzz sequences and remembers which parameter combination is requested
//! most often.
//!
//! ## Overview
//!
//! Each `GET /fizzbuzz` request is validated, counted in a shared
//! statistics table and answered with the generated sequence. `GET /stats`
//! reports the most requested combination together with its hit count.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fizzbuzz_actix::config::structs::configuration::Configuration;
//! use fizzbuzz_actix::http::http::http_service;
//! use fizzbuzz_actix::http::structs::http_service_data::HttpServiceData;
//! use fizzbuzz_actix::stats::structs::stats_tracker::StatsTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let data = Arc::new(HttpServiceData {
//!     stats_tracker: Arc::new(StatsTracker::new()),
//!     config: config.clone(),
//! });
//! let (handle, server) = http_service(config.http_server.bind_address.parse()?, data).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`fizzbuzz`] - Request parameters, validation and sequence generation
//! - [`http`] - Actix-web routes, handlers and server bootstrap
//! - [`stats`] - Concurrent hit counting per parameter combination
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the query string parser and the `fern` logging setup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// FizzBuzz request parameters and sequence generation.
pub mod fizzbuzz;

/// HTTP service implementation.
///
/// Serves `/fizzbuzz` and `/stats` over Actix-web.
pub mod http;

/// Statistics tracking module.
///
/// Counts requests per distinct parameter combination behind a mutex and
/// reports the most frequent one.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
