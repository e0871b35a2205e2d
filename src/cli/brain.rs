//! `brain`: a one-shot Gemini completion
//!
//! Every failure is printed rather than propagated, so this command always
//! exits successfully.

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::integrations::{GeminiClient, JEEVES_PROMPT};

pub const WAKING_BANNER: &str = "--- Jeeves is waking up... ---";
pub const REPLY_BANNER: &str = "--- Jeeves says: ---";

/// Arguments for `brain`
#[derive(Args, Debug)]
pub struct BrainArgs {
    /// Prompt to send (defaults to a money-saving tip request)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Model id (defaults to the configured model)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Ask the model and print its reply, or the error
pub fn handle_brain_command(settings: &Settings, args: BrainArgs) {
    println!("{}", WAKING_BANNER);

    match ask(settings, &args) {
        Ok(reply) => {
            println!();
            println!("{}", REPLY_BANNER);
            println!("{}", reply.trim_end());
        }
        Err(e) => println!("❌ Error: {}", e),
    }
}

fn ask(settings: &Settings, args: &BrainArgs) -> ExpenseResult<String> {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) => debug!("no .env loaded: {}", e),
    }

    let model = args.model.as_deref().unwrap_or(&settings.gemini_model);
    let client = GeminiClient::from_env(model)?;
    client.generate(args.prompt.as_deref().unwrap_or(JEEVES_PROMPT))
}
