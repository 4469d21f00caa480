use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::models::Feed;

/// In-memory board cache shared between the HTTP handlers and the updater.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    menu: Vec<String>,
    feeds: HashMap<String, Feed>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Snapshot of the cached board, feeds in menu order.
#[derive(Debug)]
pub struct Board {
    pub feeds: Vec<Feed>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Replace the file list that defines the board's order.
    pub fn set_menu(&self, menu: Vec<String>) {
        self.write().menu = menu;
    }

    /// Cache `feed` under `name`.
    ///
    /// Returns false when the cached content was already identical, in which
    /// case nothing is written.
    pub fn upsert(&self, name: &str, feed: Feed) -> bool {
        let mut inner = self.write();

        if inner.feeds.get(name) == Some(&feed) {
            return false;
        }

        inner.feeds.insert(name.to_owned(), feed);
        true
    }

    pub fn mark_refreshed(&self) {
        self.write().refreshed_at = Some(Utc::now());
    }

    pub fn board(&self) -> Board {
        let inner = self.read();

        let mut feeds = Vec::with_capacity(inner.menu.len());
        for name in &inner.menu {
            match inner.feeds.get(name) {
                Some(feed) => feeds.push(feed.clone()),
                None => log::warn!("No cached content for {}", name),
            }
        }

        Board {
            feeds,
            refreshed_at: inner.refreshed_at,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("store lock poisoned")
    }
}
