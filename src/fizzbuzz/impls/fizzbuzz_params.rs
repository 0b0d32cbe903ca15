use std::collections::HashMap;
use crate::fizzbuzz::enums::params_error::ParamsError;
use crate::fizzbuzz::fizzbuzz::generate;
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;

impl FizzBuzzParams {
    pub fn new(int1: u64, int2: u64, limit: u64, str1: &str, str2: &str) -> FizzBuzzParams
    {
        FizzBuzzParams {
            int1,
            int2,
            limit,
            str1: str1.to_string(),
            str2: str2.to_string(),
        }
    }

    /// Builds validated parameters out of a parsed query string.
    ///
    /// Only the first value of a repeated key is considered, and a missing key
    /// reads as an empty string. The integer check runs before the
    /// positivity check, so `int1=abc&limit=0` reports the invalid integer.
    pub fn from_query(query: &HashMap<String, Vec<String>>, max_limit: u64) -> Result<FizzBuzzParams, ParamsError>
    {
        let int1 = Self::query_integer(query, "int1");
        let int2 = Self::query_integer(query, "int2");
        let limit = Self::query_integer(query, "limit");
        let str1 = Self::query_value(query, "str1");
        let str2 = Self::query_value(query, "str2");

        let (int1, int2, limit) = match (int1, int2, limit) {
            (Some(int1), Some(int2), Some(limit)) => (int1, int2, limit),
            _ => return Err(ParamsError::InvalidParameter)
        };

        if int1 <= 0 || int2 <= 0 || limit <= 0 || str1.is_empty() || str2.is_empty() {
            return Err(ParamsError::MissingOrNonPositiveParameter);
        }

        let limit = limit as u64;
        if limit > max_limit {
            return Err(ParamsError::LimitTooLarge { max: max_limit });
        }

        Ok(FizzBuzzParams {
            int1: int1 as u64,
            int2: int2 as u64,
            limit,
            str1: str1.to_string(),
            str2: str2.to_string(),
        })
    }

    pub fn generate(&self) -> Vec<String>
    {
        generate(self)
    }

    fn query_value<'a>(query: &'a HashMap<String, Vec<String>>, key: &str) -> &'a str
    {
        query.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    fn query_integer(query: &HashMap<String, Vec<String>>, key: &str) -> Option<i64>
    {
        Self::query_value(query, key).parse::<i64>().ok()
    }
}
