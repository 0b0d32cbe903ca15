use serde::{Deserialize, Serialize};

/// Parameters of a single FizzBuzz request.
///
/// Used as the key of the statistics table, so equality and hashing cover
/// all five fields. The `Default` value (all zero / empty) is the
/// placeholder returned when no request has been recorded yet.
///
/// Instances built through `FizzBuzzParams::from_query` always hold
/// positive integers and non-empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FizzBuzzParams {
    pub int1: u64,
    pub int2: u64,
    pub limit: u64,
    pub str1: String,
    pub str2: String,
}
