use mix_common::formation::balance::{BalanceSettings, DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_PERCENT};

use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_KAFKA_URIS: &'static str = "localhost:9092";
pub const DEFAULT_KAFKA_GROUP: &'static str = "mix-teams-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig
{
    pub broker_uris: Vec<String>,
    pub group: String,
    pub balance: BalanceSettings,
}

impl ServiceConfig
{
    pub fn from_env() -> ServiceConfig
    {
        ServiceConfig::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, falling back to defaults for anything missing or unparseable
    pub fn from_lookup<F>(lookup: F) -> ServiceConfig
        where F: Fn(&str) -> Option<String>
    {
        let broker_uris: Vec<String> = lookup("KAFKA_URIS")
            .unwrap_or(String::from(DEFAULT_KAFKA_URIS))
            .split(',')
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty())
            .collect();

        let broker_uris = if broker_uris.is_empty()
        {
            vec!(String::from(DEFAULT_KAFKA_URIS))
        } else
        {
            broker_uris
        };

        let group = lookup("MIX_KAFKA_GROUP")
            .unwrap_or(String::from(DEFAULT_KAFKA_GROUP));

        let balance = BalanceSettings::new(
            parse_or(&lookup, "MIX_MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS),
            parse_or(&lookup, "MIX_BALANCE_TARGET", DEFAULT_TARGET_PERCENT),
        );

        ServiceConfig {
            broker_uris,
            group,
            balance,
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
    where F: Fn(&str) -> Option<String>, T: FromStr+Display
{
    match lookup(name)
    {
        None => default,
        Some(raw) => match raw.trim().parse::<T>()
        {
            Ok(value) => value,
            Err(_) =>
            {
                warn!("{}: '{}' is not valid, using {}", name, raw, default);
                default
            },
        },
    }
}
