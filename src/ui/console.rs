use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use serde::Deserialize;

use crate::models::Feed;

use super::{AppState, Notify, Progress, Reload};

/// Spinner bracketing the refresh request.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        Spinner {
            bar: ProgressBar::new_spinner(),
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for Spinner {
    fn start(&self) {
        self.bar.set_message("refreshing");
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    fn done(&self) {
        self.bar.finish_and_clear();
    }
}


/// Notifications as colored stderr lines.
pub struct Console;

impl Notify for Console {
    fn success(&self, message: &str) {
        eprintln!("{} {}", "✔".green(), message);
    }

    fn failure(&self, message: &str) {
        eprintln!("{} {}", "✘".red(), message);
    }
}


/// Reloads the view by fetching the board again and rendering it from
/// scratch, through a fresh state.
pub struct BoardReload {
    http: reqwest::Client,
    server: String,
}

impl BoardReload {
    pub fn new(http: reqwest::Client, server: &str) -> Self {
        BoardReload {
            http,
            server: server.to_owned(),
        }
    }
}

impl Reload for BoardReload {
    fn reload(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(async move {
            if let Err(e) = show(&self.http, &self.server).await {
                Console.failure(e);
            }
        })
    }
}


#[derive(Debug, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub feeds: Vec<Feed>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Fetch the board from the server.
pub async fn fetch_board(http: &reqwest::Client, server: &str) -> Result<Board, &'static str> {
    let url = format!("{}/", server.trim_end_matches('/'));

    let resp = http
        .get(&url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| {
            log::error!("Could not fetch the board: {}", e);
            "Could not fetch the board."
        })?;

    resp.json().await.map_err(|e| {
        log::error!("Could not decode the board: {}", e);
        "Could not decode the board."
    })
}

/// Fetch the board and render it through a fresh view state.
pub async fn show(http: &reqwest::Client, server: &str) -> Result<(), &'static str> {
    let mut state = AppState::new();
    state.created().await;

    let board = fetch_board(http, server).await?;
    state.feeds = board.feeds;

    render(&state);

    if let Some(at) = board.refreshed_at {
        println!("{}", format!("refreshed at {}", at.format("%Y-%m-%d %H:%M UTC")).dimmed());
    }

    Ok(())
}

/// Print the board, one feed per block.
pub fn render(state: &AppState) {
    if state.fullscreen_loading {
        println!("loading...");
        return;
    }

    if state.show_seo {
        println!("{}", "feedboard: curated links from a markdown repository".bold());
        println!();
    }

    for feed in &state.feeds {
        println!("{}", feed.title.bold().underline());
        for item in &feed.items {
            if item.title.is_empty() {
                println!("  {}", item.url);
            } else {
                println!("  {}  {}", item.title, item.url.dimmed());
            }
        }
        println!();
    }
}
