use std::{net::SocketAddr, str::FromStr};

use anyhow::{Context, anyhow};
use quicksilver_dispatch::problem::speed::{AVERAGE_SPEED, MetersPerSecond};
use tracing::Level;

const HOST_ENV_VAR: &str = "QUICKSILVER_HOST";
const PORT_ENV_VAR: &str = "QUICKSILVER_PORT";
const LOG_LEVEL_ENV_VAR: &str = "QUICKSILVER_LOG_LEVEL";
const AVERAGE_SPEED_ENV_VAR: &str = "QUICKSILVER_AVERAGE_SPEED";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
    pub average_speed: MetersPerSecond,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: String::from("0.0.0.0"),
            port: 3000,
            log_level: Level::INFO,
            average_speed: AVERAGE_SPEED,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();

        let average_speed = match lookup(AVERAGE_SPEED_ENV_VAR) {
            Some(value) => {
                let speed: f64 = parse_var(AVERAGE_SPEED_ENV_VAR, &value)?;
                if !speed.is_finite() || speed <= 0.0 {
                    return Err(anyhow!("{AVERAGE_SPEED_ENV_VAR} must be a positive number"));
                }
                MetersPerSecond::new(speed)
            }
            None => defaults.average_speed,
        };

        Ok(Config {
            host: lookup(HOST_ENV_VAR).unwrap_or(defaults.host),
            port: lookup(PORT_ENV_VAR)
                .map(|value| parse_var(PORT_ENV_VAR, &value))
                .transpose()?
                .unwrap_or(defaults.port),
            log_level: lookup(LOG_LEVEL_ENV_VAR)
                .map(|value| parse_var(LOG_LEVEL_ENV_VAR, &value))
                .transpose()?
                .unwrap_or(defaults.log_level),
            average_speed,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_var<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {key}: {value:?}"))
}
