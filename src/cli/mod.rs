//! CLI subcommand definitions and handlers.
//!
//! Uses clap derive to define the subcommand hierarchy:
//! - `start` (default) -- serve the Twilio webhooks
//! - `check` -- validate the environment configuration and exit
//! - `version` -- print build/version info

use crate::config::Config;
use crate::logging::{LogFormat, LoggingConfig};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

/// Default listen address for the webhook server.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

/// Forwards Twilio calls to your phone and emails voicemail transcripts.
#[derive(Parser, Debug)]
#[command(
    name = "twilio-voicemail",
    version = env!("CARGO_PKG_VERSION"),
    about = "Call forwarding and voicemail webhooks for Twilio"
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LogArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl LogArgs {
    pub fn to_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the webhooks (default when no subcommand is given).
    Start {
        /// Address to listen on.
        #[arg(short, long, default_value = DEFAULT_LISTEN)]
        listen: SocketAddr,
    },

    /// Validate the environment configuration and exit.
    Check,

    /// Print version, build date, and git commit information.
    Version,
}

impl Cli {
    /// The subcommand to run, `start` on the default address when omitted.
    pub fn command(&self) -> Command {
        match &self.command {
            Some(Command::Start { listen }) => Command::Start { listen: *listen },
            Some(Command::Check) => Command::Check,
            Some(Command::Version) => Command::Version,
            None => Command::Start {
                listen: default_listen(),
            },
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Load and validate the environment configuration. Every problem is
/// returned as a printable message.
pub fn load_config() -> Result<Config, Vec<String>> {
    let mut config = Config::from_env();
    let errors = config.validate();
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}

/// Run the `check` subcommand.
pub fn handle_check() -> Result<(), Box<dyn std::error::Error>> {
    match load_config() {
        Ok(config) => {
            println!("Configuration OK");
            println!("  Forwarding to: {}", config.forwarding_number);
            println!("  Notify:        {}", config.notification_email);
            match config.voicemail_path() {
                Some(path) => println!("  Prompt file:   {}", path.display()),
                None => println!("  Prompt script: {}", config.voicemail_script),
            }
            Ok(())
        }
        Err(problems) => {
            for problem in &problems {
                eprintln!("  - {}", problem);
            }
            Err(format!("{} configuration problem(s)", problems.len()).into())
        }
    }
}

/// Run the `version` subcommand.
pub fn handle_version() {
    println!("twilio-voicemail {}", env!("CARGO_PKG_VERSION"));
    println!("  Build date: {}", env!("TWILIO_VOICEMAIL_BUILD_DATE"));
    println!("  Git commit: {}", env!("TWILIO_VOICEMAIL_GIT_HASH"));
    println!(
        "  Platform:   {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}
