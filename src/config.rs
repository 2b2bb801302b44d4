//! Configuration Management
//!
//! Settings are layered from, in increasing priority, the user config
//! (`<config dir>/filtergen/config.toml`), `filtergen.toml` in the working
//! directory, and `FILTERGEN_*` environment variables. All sources are
//! optional; without them the defaults apply.
//!
//! Only ambient settings live here. The numerical limits of the designers are
//! fixed and cannot be loosened from a file or the environment.
use config::File;
use config::Source;
use config::Value;
use once_cell::sync::Lazy;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::level_filters::LevelFilter;

/// Get global configuration
pub fn config() -> Config {
    get_config().clone()
}

// helper to deal with poisoned Mutex
fn get_config() -> MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|poison| {
        warn!("config poisoned, restoring initial config");
        let mut c = poison.into_inner();
        *c = init_config();
        CONFIG.clear_poison();
        c
    })
}

fn init_config() -> Config {
    let mut settings = ::config::Config::builder();

    // user config
    if let Some(mut path) = dirs::config_dir() {
        path.push("filtergen");
        path.push("config.toml");

        settings = settings.add_source(File::from(path.clone()).required(false));
    }

    // project config
    settings =
        settings.add_source(File::new("filtergen.toml", config::FileFormat::Toml).required(false));

    // env config
    settings = settings.add_source(config::Environment::with_prefix("filtergen"));

    // start from default config
    let mut c = Config::default();

    match settings.build() {
        Ok(settings) => match settings.collect() {
            Ok(config) => {
                for (k, v) in config.into_iter() {
                    c.set_value(k, v);
                }
            }
            Err(e) => warn!("error parsing config {e:?}"),
        },
        Err(e) => warn!("error reading config {e:?}"),
    }
    c
}

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(init_config()));

/// Configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
}

impl Config {
    fn set_value<V: Into<config::Value>>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            "log_level" => {
                if let Some(v) = config_parse::<LevelFilter>(&name, &value) {
                    self.log_level = v;
                }
            }
            _ => warn!("unknown config key {name}"),
        }
    }
}

impl Default for Config {
    #[cfg(debug_assertions)]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::INFO,
        }
    }

    #[cfg(not(debug_assertions))]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::WARN,
        }
    }
}

fn config_parse<T: FromStr>(name: &str, v: &Value) -> Option<T> {
    let parsed = v
        .clone()
        .into_string()
        .ok()
        .and_then(|s| s.parse::<T>().ok());
    if parsed.is_none() {
        warn!("invalid config value for {name}: {v:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_log_level() {
        let mut c = Config::default();
        c.set_value("log_level", "debug");
        assert_eq!(c.log_level, LevelFilter::DEBUG);
        c.set_value("log_level", "off");
        assert_eq!(c.log_level, LevelFilter::OFF);
    }

    #[test]
    fn ignore_invalid_values() {
        let mut c = Config::default();
        c.set_value("log_level", "chatty");
        c.set_value("window", "hann");
        assert_eq!(c, Config::default());
    }

    #[test]
    fn tolerances_are_not_configurable() {
        let mut c = Config::default();
        c.set_value("gain_tolerance", "inf");
        c.set_value("imag_tolerance", "1");
        assert_eq!(c, Config::default());
    }
}
