use crate::common::common::{log_level_filter, parse_query};

#[test]
fn test_parse_query_simple() {
    let query = parse_query("int1=3&int2=5&limit=15&str1=Fizz&str2=Buzz");
    assert_eq!(query.len(), 5);
    assert_eq!(query["int1"], vec!["3"]);
    assert_eq!(query["str2"], vec!["Buzz"]);
}

#[test]
fn test_parse_query_repeated_keys_keep_order() {
    let query = parse_query("a=1&a=2&a=3");
    assert_eq!(query["a"], vec!["1", "2", "3"]);
}

#[test]
fn test_parse_query_decoding() {
    let query = parse_query("str1=Fizz%20Buzz&str2=a+b&str3=%C3%A7a");
    assert_eq!(query["str1"], vec!["Fizz Buzz"]);
    assert_eq!(query["str2"], vec!["a b"]);
    assert_eq!(query["str3"], vec!["ça"]);
}

#[test]
fn test_parse_query_value_with_equals_sign() {
    let query = parse_query("str1=a=b");
    assert_eq!(query["str1"], vec!["a=b"]);
}

#[test]
fn test_parse_query_key_without_value() {
    let query = parse_query("flag&&=skipped");
    assert_eq!(query.len(), 1);
    assert_eq!(query["flag"], vec![""]);
}

#[test]
fn test_parse_query_empty() {
    assert!(parse_query("").is_empty());
}

#[test]
fn test_log_level_filter() {
    assert_eq!(log_level_filter("info"), Some(log::LevelFilter::Info));
    assert_eq!(log_level_filter("off"), Some(log::LevelFilter::Off));
    assert_eq!(log_level_filter("loud"), None);
}
