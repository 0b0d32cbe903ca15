use std::collections::HashMap;
use proptest::prelude::*;
use crate::fizzbuzz::enums::params_error::ParamsError;
use crate::fizzbuzz::fizzbuzz::generate;
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in pairs {
        map.entry(key.to_string()).or_default().push(value.to_string());
    }
    map
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_classic_fizzbuzz() {
        let params = FizzBuzzParams::new(3, 5, 15, "Fizz", "Buzz");
        assert_eq!(
            generate(&params),
            vec![
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz",
                "11", "Fizz", "13", "14", "FizzBuzz"
            ]
        );
    }

    #[test]
    fn test_limit_one() {
        let params = FizzBuzzParams::new(3, 5, 1, "Fizz", "Buzz");
        assert_eq!(generate(&params), vec!["1"]);
    }

    #[test]
    fn test_divisor_one_always_matches() {
        let params = FizzBuzzParams::new(1, 1, 3, "a", "b");
        assert_eq!(generate(&params), vec!["ab", "ab", "ab"]);
    }

    #[test]
    fn test_same_divisors_concatenate_in_order() {
        let params = FizzBuzzParams::new(2, 2, 4, "x", "y");
        assert_eq!(generate(&params), vec!["1", "xy", "3", "xy"]);
    }

    #[test]
    fn test_method_matches_free_function() {
        let params = FizzBuzzParams::new(4, 6, 24, "foo", "bar");
        assert_eq!(params.generate(), generate(&params));
    }

    #[test]
    fn test_unicode_strings() {
        let params = FizzBuzzParams::new(2, 3, 6, "ça", "va");
        let result = generate(&params);
        assert_eq!(result[1], "ça");
        assert_eq!(result[2], "va");
        assert_eq!(result[5], "çava");
    }
}

mod from_query_tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        let params = FizzBuzzParams::from_query(&q, 1000).unwrap();
        assert_eq!(params, FizzBuzzParams::new(3, 5, 15, "Fizz", "Buzz"));
    }

    #[test]
    fn test_first_value_wins() {
        let q = query(&[("int1", "3"), ("int1", "7"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        let params = FizzBuzzParams::from_query(&q, 1000).unwrap();
        assert_eq!(params.int1, 3);
    }

    #[test]
    fn test_non_integer_rejected() {
        let q = query(&[("int1", "three"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::InvalidParameter));
    }

    #[test]
    fn test_missing_integer_rejected_as_invalid() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::InvalidParameter));
    }

    #[test]
    fn test_integer_check_precedes_positivity_check() {
        let q = query(&[("int1", "x"), ("int2", "0"), ("limit", "0"), ("str1", ""), ("str2", "")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::InvalidParameter));
    }

    #[test]
    fn test_zero_int1_rejected() {
        let q = query(&[("int1", "0"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::MissingOrNonPositiveParameter));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "0"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::MissingOrNonPositiveParameter));
    }

    #[test]
    fn test_negative_int2_rejected() {
        let q = query(&[("int1", "3"), ("int2", "-5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::MissingOrNonPositiveParameter));
    }

    #[test]
    fn test_empty_string_rejected() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "15"), ("str1", ""), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::MissingOrNonPositiveParameter));
    }

    #[test]
    fn test_missing_string_rejected() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::MissingOrNonPositiveParameter));
    }

    #[test]
    fn test_limit_above_maximum_rejected() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "1001"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::LimitTooLarge { max: 1000 }));
    }

    #[test]
    fn test_limit_at_maximum_accepted() {
        let q = query(&[("int1", "3"), ("int2", "5"), ("limit", "1000"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert!(FizzBuzzParams::from_query(&q, 1000).is_ok());
    }

    #[test]
    fn test_overflowing_integer_rejected() {
        let q = query(&[("int1", "99999999999999999999"), ("int2", "5"), ("limit", "15"), ("str1", "Fizz"), ("str2", "Buzz")]);
        assert_eq!(FizzBuzzParams::from_query(&q, 1000), Err(ParamsError::InvalidParameter));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParamsError::InvalidParameter.to_string(), "int1, int2 and limit parameters must be integers");
        assert_eq!(ParamsError::MissingOrNonPositiveParameter.to_string(), "all parameters are required and must be valid");
        assert_eq!(ParamsError::LimitTooLarge { max: 10 }.to_string(), "limit must not be greater than 10");
    }
}

proptest! {
    #[test]
    fn prop_length_matches_limit(int1 in 1u64..50, int2 in 1u64..50, limit in 1u64..500) {
        let params = FizzBuzzParams::new(int1, int2, limit, "Fizz", "Buzz");
        prop_assert_eq!(generate(&params).len() as u64, limit);
    }

    #[test]
    fn prop_elements_follow_divisibility(
        int1 in 1u64..30,
        int2 in 1u64..30,
        limit in 1u64..300,
        str1 in "[a-z]{1,6}",
        str2 in "[A-Z]{1,6}"
    ) {
        let params = FizzBuzzParams::new(int1, int2, limit, &str1, &str2);
        for (index, value) in generate(&params).iter().enumerate() {
            let i = index as u64 + 1;
            let expected = match (i % int1 == 0, i % int2 == 0) {
                (true, true) => format!("{str1}{str2}"),
                (true, false) => str1.clone(),
                (false, true) => str2.clone(),
                (false, false) => i.to_string(),
            };
            prop_assert_eq!(value, &expected);
        }
    }
}
