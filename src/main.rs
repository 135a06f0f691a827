use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use twilio_voicemail::cli::{self, Cli, Command};
use twilio_voicemail::logging::init_logging;
use twilio_voicemail::notify::MailgunNotifier;
use twilio_voicemail::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.logging.to_config())?;

    match cli.command() {
        Command::Version => {
            cli::handle_version();
            Ok(())
        }
        Command::Check => cli::handle_check(),
        Command::Start { listen } => {
            let config = match cli::load_config() {
                Ok(config) => config,
                Err(problems) => {
                    for problem in &problems {
                        error!("{}", problem);
                    }
                    return Err("invalid configuration".into());
                }
            };

            info!(
                version = env!("CARGO_PKG_VERSION"),
                commit = env!("TWILIO_VOICEMAIL_GIT_HASH"),
                custom_prompt = config.enable_custom_prompt,
                "Starting twilio-voicemail"
            );

            let notifier = Arc::new(MailgunNotifier::from_config(&config));
            let state = Arc::new(AppState::new(config, notifier));
            server::serve(listen, state).await?;
            Ok(())
        }
    }
}
