use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;

/// Produces the FizzBuzz sequence for `params`, one element per integer in
/// `1..=params.limit`.
///
/// The caller guarantees `int1` and `int2` are non-zero.
pub fn generate(params: &FizzBuzzParams) -> Vec<String>
{
    let combined = format!("{}{}", params.str1, params.str2);
    (1..=params.limit).map(|i| {
        match (i % params.int1 == 0, i % params.int2 == 0) {
            (true, true) => combined.clone(),
            (true, false) => params.str1.clone(),
            (false, true) => params.str2.clone(),
            (false, false) => i.to_string()
        }
    }).collect()
}
