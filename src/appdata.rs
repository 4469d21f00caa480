use crate::feed_manager::FeedManager;
use crate::github;
use crate::prelude::*;

#[derive(Clone)]
pub struct AppData {
    pub cfg: Config,
    pub store: Store,
    pub feeds: FeedManager,
}

impl AppData {
    pub fn new(cfg: Config) -> Self {
        let store = Store::new();
        let feeds = FeedManager::new(store.clone(), github::Client::new(&cfg));

        AppData { cfg, store, feeds }
    }
}
