use serde::{Deserialize, Serialize};
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;

/// A parameter combination and the number of times it was requested.
///
/// Serialized as `{"params": {...}, "hits": n}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsEntry {
    pub params: FizzBuzzParams,
    pub hits: u64,
}
