//! Example: Keeping a mailbox alive while an external command runs.
//!
//! Parses a mailbox locator, prints the server-side mailbox name, then runs a
//! command and "polls" the mailbox every few seconds until it exits.
//!
//! # Usage
//!
//! ```bash
//! export IMAP_FOLDER="{imap.example.com/ssl}Lists/rust"
//! export RUST_LOG=imap_keepalive=trace
//!
//! cargo run --example keepalive -- sleep 7
//! ```

use imap_keepalive::locator::fix_path;
use imap_keepalive::quote::quote_string;
use imap_keepalive::{wait_with_poll, KeepaliveConfig, MailboxLocator, SessionFlags};
use std::env;
use std::error::Error;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imap_keepalive=debug")),
        )
        .with_target(true)
        .init();

    let folder = env::var("IMAP_FOLDER").unwrap_or_else(|_| "{localhost}INBOX".to_string());
    let mut command = env::args().skip(1);
    let program = command.next().unwrap_or_else(|| "sleep".to_string());
    let args: Vec<String> = command.collect();

    let config = KeepaliveConfig::builder()
        .check_interval(Duration::from_secs(3))
        .build()?;

    let locator: MailboxLocator = folder.parse()?;
    let mailbox = fix_path(&locator.path, '.', config.limits.path);
    println!(
        "Server {}:{} ({:?}), mailbox {}",
        locator.host,
        locator.port(),
        locator.transport,
        quote_string(&mailbox, config.limits.quoted)
    );

    let mut child = tokio::process::Command::new(&program)
        .args(if args.is_empty() { vec!["7".to_string()] } else { args })
        .spawn()
        .map_err(|e| format!("failed to start {program}: {e}"))?;

    let mut flags = SessionFlags::default();
    let outcome = wait_with_poll(
        &mut child,
        &mut flags,
        |seen: &SessionFlags| {
            tracing::info!(passive = seen.passive, "NOOP on selected mailbox");
            async {}
        },
        config.check_interval,
    )
    .await?;

    println!(
        "{program} exited with {} after {} polls",
        outcome.exit_status, outcome.polls
    );

    Ok(())
}
