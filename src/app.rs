//! Command-line entry: argument model, the end-to-end run, exit status

use crate::adapters::{HttpSlackTransport, SlackClient};
use crate::params::Params;
use crate::presenter::{StderrProgress, print_users};
use crate::reference::{parse_reference, trim_emoji_colons};
use crate::resolver::{NoProgress, ProgressReporter, ReactionResolver};
use anyhow::Context as _;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

/// List the users who reacted to a Slack message with a specific emoji
///
/// Required Slack scopes: reactions:read, users:read, channels:history.
/// The bot token is read from SLACK_BOT_TOKEN.
#[derive(Parser, Debug)]
#[command(name = "whoreacted", version, about)]
pub struct Cli {
    /// Message permalink (e.g. https://workspace.slack.com/archives/C0123456789/p1234567890123456)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Channel ID (e.g. C0123456789); requires --timestamp
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Message timestamp (e.g. 1234567890.123456); requires --channel
    #[arg(short, long)]
    pub timestamp: Option<String>,

    /// Reaction name (e.g. thumbsup); colons are optional
    #[arg(short, long)]
    pub reaction: String,

    /// Do not draw the progress indicator
    #[arg(short, long)]
    pub quiet: bool,
}

/// Resolve and print the reacting users
///
/// Input is validated and the credential checked before any network call.
///
/// # Arguments
///
/// * `cli` - Parsed command line
/// * `params` - Configuration loaded once at startup
/// * `out` - Destination for the label list
pub async fn run<W: Write>(cli: &Cli, params: &Params, out: &mut W) -> anyhow::Result<()> {
    let message = parse_reference(
        cli.url.as_deref(),
        cli.channel.as_deref(),
        cli.timestamp.as_deref(),
    )?;
    let emoji_name = trim_emoji_colons(&cli.reaction);

    let token = params.bot_token()?;
    let base_url =
        Url::parse(&params.slack_api_base_url).context("Parsing SLACK_API_BASE_URL")?;

    let transport = Arc::new(HttpSlackTransport::new(
        base_url,
        token.to_string(),
        params.http_timeout(),
        params.http_connect_timeout(),
    )?);
    let client = Arc::new(SlackClient::new(transport, params.retry_policy()));
    let resolver = ReactionResolver::new(client);

    info!(%message, %emoji_name, "Resolving reactions");

    let progress: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(StderrProgress)
    };

    let users = resolver
        .fetch_reacting_users(&message, emoji_name, progress.as_ref())
        .await?;

    print_users(out, emoji_name, &users).context("Writing output")?;
    Ok(())
}

/// Report a run's outcome and map it to the process exit status
///
/// Every error is fatal by the time it reaches here, so any `Err` exits
/// non-zero; an empty result is still a success.
pub fn exit_code(result: &anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = ?err, "Aborting");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
