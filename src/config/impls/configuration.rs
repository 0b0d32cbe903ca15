use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use crate::common::common::log_level_filter;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::fizzbuzz_config::FizzBuzzConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            fizzbuzz_config: FizzBuzzConfig::default(),
            http_server: HttpServerConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// When the file is missing or unreadable and `create` is set, a default
    /// configuration is written to `path` and an error is still returned so
    /// the operator can review it before starting the service.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start the service again, exiting now...");
                        Err(ConfigurationError::ValidationError(format!("created default {path}")))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("{error}");
            return Err(error);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level \"{}\"", self.log_level)));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be greater than 0")));
        }
        if self.fizzbuzz_config.max_limit == 0 {
            return Err(ConfigurationError::ValidationError(String::from("fizzbuzz_config.max_limit must be greater than 0")));
        }
        if self.http_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("http_server.bind_address \"{}\" is not a valid socket address", self.http_server.bind_address)));
        }
        if self.http_server.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("http_server.threads must be greater than 0")));
        }
        Ok(())
    }
}
