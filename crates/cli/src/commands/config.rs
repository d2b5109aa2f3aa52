use clap::Args;

use esquadria_core::{PricingPolicy, PolicyLoadOptions};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

/// Print the effective pricing policy after defaults, `esquadria.toml`, and
/// `ESQUADRIA_*` environment overrides are merged.
pub fn run(args: &ConfigArgs) -> CommandResult {
    let policy = match PricingPolicy::load(PolicyLoadOptions::default()) {
        Ok(policy) => policy,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "policy_validation",
                format!("policy issue: {error}"),
                2,
            );
        }
    };

    let rendered = if args.json {
        serde_json::to_string_pretty(&policy)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"))
    } else {
        toml::to_string(&policy)
            .unwrap_or_else(|error| format!("policy serialization failed: {error}"))
    };

    CommandResult::success(rendered)
}
