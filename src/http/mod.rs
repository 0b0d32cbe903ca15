//! HTTP service exposing FizzBuzz generation and request statistics.
//!
//! # Supported Endpoints
//!
//! - `GET /fizzbuzz?int1=&int2=&limit=&str1=&str2=` - Record the request and
//!   return the generated sequence as a JSON array of strings
//! - `GET /stats` - Return the most requested parameter combination as
//!   `{"params": {...}, "hits": n}`
//!
//! Invalid FizzBuzz parameters are answered with `400 Bad Request` and a
//! plain-text message; the statistics are left untouched in that case.
//! Unknown routes answer `404` with a JSON status body.

/// Data structures shared with request handlers.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
