use std::str::FromStr;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "picoforge")]
#[command(about = "Compose a cross-platform C/C++ build environment")]
#[command(version)]
pub struct Args {
    /// Build mode ("development" or "release")
    #[arg(long, value_name = "mode")]
    pub mode: Option<String>,

    /// Installation prefix directory
    #[arg(long, value_name = "dir", default_value = "/usr/local")]
    pub prefix: String,

    /// Set configuration options (can be used multiple times)
    #[arg(short = 'D', value_name = "option=value")]
    pub define: Vec<Define>,
}

#[derive(Debug, Clone)]
pub struct Define {
    pub key: String,
    pub value: String,
}

impl FromStr for Define {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once("=").context("Expected option=value")?;
        Ok(Define {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
