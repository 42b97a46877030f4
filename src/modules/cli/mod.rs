use crate::config::{Config, DEFAULT_CONFIG_PATH};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "lfc")]
#[command(version = "0.1.0")]
#[command(about = "LF Content API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(name = "serve")]
    #[command(about = "Start the API server (default)")]
    Serve(ServerArgs),

    #[command(name = "init-config")]
    #[command(about = "Write a default config file")]
    InitConfig {
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

#[derive(Parser, Debug)]
pub struct ServerArgs {
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn init_config(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!("Config '{}' already exists (use --force to overwrite)", path.display()).into());
    }

    Config::default().save(path)?;
    println!("✓ Config written to: {}", path.display());
    println!("  - Set ACCESS_TOKEN_SECRET or edit [auth] before serving");
    Ok(())
}
