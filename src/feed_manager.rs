use futures::future;

use crate::feed;
use crate::github;
use crate::prelude::*;

/// Fetches the board's content and keeps the store up to date.
#[derive(Clone)]
pub struct FeedManager {
    store: Store,
    source: github::Client,
}

impl FeedManager {
    pub fn new(store: Store, source: github::Client) -> Self {
        FeedManager { store, source }
    }

    /// Re-fetch the menu and every feed, replacing the cached board.
    ///
    /// A feed that cannot be fetched keeps its previous content; only a
    /// failure to list the repository itself is an error.
    pub async fn refresh_all(&self) -> Result<(), &'static str> {
        let entries = self.source.list_markdown().await?;

        self.store
            .set_menu(entries.iter().map(|entry| entry.name.clone()).collect());

        let results = future::join_all(entries.iter().map(|entry| self.refresh_one(entry))).await;

        let errors = results.iter().filter(|res| res.is_err()).count();
        if errors > 0 {
            log::warn!("{} of {} feeds could not be refreshed", errors, results.len());
        }

        self.store.mark_refreshed();

        Ok(())
    }

    async fn refresh_one(&self, entry: &github::DirEntry) -> Result<(), &'static str> {
        let content = self.source.fetch_raw(entry).await?;

        if self.store.upsert(&entry.name, feed::parse(&entry.name, &content)) {
            log::debug!("Updated {}", entry.name);
        } else {
            log::debug!("{} is unchanged", entry.name);
        }

        Ok(())
    }
}
