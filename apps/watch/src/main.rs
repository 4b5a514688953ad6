//! Terminal watcher for chirp notifications.
//!
//! Polls a running chirp service the way a logged-in page would and prints
//! badge and task-progress updates as they arrive. Handy for keeping an
//! eye on the inbox (or a long export job) without a browser tab.

mod source;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use chirp_client::ApiClient;
use chirp_page_state::PageState;
use chirp_poller::{Poller, PollerConfig, PollerEvent};

use source::HttpSource;

#[derive(Debug, Parser)]
#[command(name = "chirp-watch", about = "Watch chirp notifications from the terminal")]
struct Args {
    /// Base URL of the chirp service, e.g. https://blog.example.com
    #[arg(long)]
    url: String,

    /// Seconds between polls.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Session cookie for authenticated endpoints, e.g. "session=...".
    #[arg(long)]
    cookie: Option<String>,

    /// Task ids to track progress for (repeatable).
    #[arg(long = "task")]
    tasks: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chirp_poller=debug,chirp_client=debug")),
        )
        .init();

    let args = Args::parse();

    let mut client = ApiClient::new(&args.url).context("building API client")?;
    if let Some(cookie) = &args.cookie {
        client = client.with_session_cookie(cookie);
    }

    let page = Arc::new(Mutex::new(PageState::new()));
    {
        let mut page = page.lock().await;
        for task in &args.tasks {
            page.register_task(task);
        }
    }

    let config = PollerConfig {
        interval: Duration::from_secs(args.interval),
        ..PollerConfig::default()
    };

    let mut handle = Poller::new(HttpSource::new(client), page.clone(), config).spawn();
    let Some(mut events) = handle.take_events() else {
        anyhow::bail!("poller events already taken");
    };

    info!(url = %args.url, interval = args.interval, "watching notifications");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => {
                let Some(event) = event else { break };
                render(&event);
            }
        }
    }

    handle.stopped().await;

    let page = page.lock().await;
    info!(
        unread = page.badge().count(),
        visible = page.badge().visible(),
        "final badge state"
    );
    for task in page.tasks().task_ids() {
        if let Some(percent) = page.tasks().percent(task) {
            info!(task, percent, "final task progress");
        }
    }

    Ok(())
}

fn render(event: &PollerEvent) {
    match event {
        PollerEvent::UnreadCount { count } => {
            info!(count, "unread messages");
        }
        PollerEvent::TaskProgress {
            task_id,
            percent,
            displayed,
        } => {
            if *displayed {
                info!(task = %task_id, percent, "task progress");
            } else {
                info!(task = %task_id, percent, "task progress (untracked)");
            }
        }
        PollerEvent::CycleCompleted { delivered, cursor } => {
            if *delivered > 0 {
                debug!(delivered, cursor, "poll cycle complete");
            }
        }
        PollerEvent::CycleFailed { error } => {
            warn!(error = %error, "poll cycle failed");
        }
    }
}
