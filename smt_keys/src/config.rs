use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand, ValueEnum};

/// Derive sparse Merkle tree leaf keys
#[derive(Parser, Debug)]
#[command(name = "smt-keys")]
#[command(author, version, about = "Derive zkEVM state tree leaf keys", long_about = None)]
#[command(propagate_version = true)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(value_enum, long, env = "LOG_LEVEL", default_value = "ERROR", global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(value_enum, long, env = "LOG_FORMAT", default_value = "PRETTY", global = true)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Key of an account's balance leaf
    Balance {
        /// 0x-prefixed 20-byte address
        address: Address,
    },
    /// Key of an account's nonce leaf
    Nonce {
        /// 0x-prefixed 20-byte address
        address: Address,
    },
    /// Key of a contract's code hash leaf
    Code {
        /// 0x-prefixed 20-byte address
        address: Address,
    },
    /// Key of a contract's code length leaf
    CodeLength {
        /// 0x-prefixed 20-byte address
        address: Address,
    },
    /// Key of a contract storage slot
    Storage {
        /// 0x-prefixed 20-byte address
        address: Address,
        /// Storage position, as 0x-prefixed hex or decimal
        position: U256,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[clap(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Error,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[clap(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}
