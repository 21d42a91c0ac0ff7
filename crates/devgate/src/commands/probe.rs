//! Probe command: run the request guard on a user agent string.

use crate::cli::ProbeArgs;
use crate::error::Result;
use crate::guard::{self, Verdict};

/// Execute the probe command.
pub async fn execute(args: ProbeArgs) -> Result<()> {
    println!("{}", describe(&args.user_agent));
    Ok(())
}

/// One-line description of the guard decision.
pub fn describe(user_agent: &str) -> String {
    match (guard::evaluate(Some(user_agent)), guard::match_version(user_agent)) {
        (Verdict::Intercept { version }, _) => {
            format!("intercept: Chrome/Chromium {} gets the notice page", version)
        }
        (Verdict::Forward, Some(version)) => format!("forward: Chrome/Chromium {}", version),
        (Verdict::Forward, None) => "forward: no Chrome/Chromium version found".to_string(),
    }
}
