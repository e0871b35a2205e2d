//! AI Advisor CLI command

use clap::Args;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::services::advisor::ADVISOR_CAPTION;
use crate::services::Advisor;

/// Arguments for `advise`
#[derive(Args, Debug)]
pub struct AdviseArgs {
    /// Ask for financial guidance
    pub query: Option<String>,
}

/// Print one of the advisor's canned replies
pub fn handle_advise_command(settings: &Settings, args: AdviseArgs) -> ExpenseResult<()> {
    let query = args.query.unwrap_or_default();

    println!("{}", ADVISOR_CAPTION);
    super::latency(settings).wait();

    let reply = Advisor::new().consult(&query, &mut rand::thread_rng());
    println!("{}", reply);
    Ok(())
}
