//! Value enums for CLI commands

use clap::ValueEnum;

use crate::sentry::Stat;

/// Stat names accepted by 'get stats'
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatArg {
    /// Events accepted by the server
    Received,
    /// Events dropped because of rate limits
    Rejected,
    /// Events dropped by inbound filters
    Blacklisted,
}

impl From<StatArg> for Stat {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Received => Stat::Received,
            StatArg::Rejected => Stat::Rejected,
            StatArg::Blacklisted => Stat::Blacklisted,
        }
    }
}

impl std::fmt::Display for StatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Stat::from(*self).fmt(f)
    }
}
