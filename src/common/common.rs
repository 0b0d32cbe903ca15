use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into its keys and values.
///
/// Keys and values are percent-decoded (`+` reads as a space), repeated keys
/// keep every value in order, and a key without `=` maps to an empty value.
pub fn parse_query(query: &str) -> HashMap<String, Vec<String>> {
    let mut queries: HashMap<String, Vec<String>> = HashMap::new();
    for query_item in query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = decode_query_component(key_name_raw);
        if key_name.is_empty() {
            continue;
        }
        let value_data = decode_query_component(value_data_raw);
        queries.entry(key_name).or_default().push(value_data);
    }
    queries
}

fn decode_query_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub fn log_level_filter(log_level: &str) -> Option<log::LevelFilter> {
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match log_level_filter(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
