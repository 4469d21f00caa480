use actix::prelude::*;

use crate::feed_manager::FeedManager;

/// How long the cached board is served before being re-fetched unprompted.
const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30 * 60);

/// Actor that keeps the cached board fresh.
pub struct Updater {
    feed_manager: FeedManager,
}

impl Updater {
    pub fn new(feed_manager: FeedManager) -> Self {
        Updater { feed_manager }
    }

    fn refresh(&mut self, ctx: &mut <Self as Actor>::Context) {
        ctx.notify(Refresh);
    }
}

impl Actor for Updater {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        // Fetch the board now...
        self.refresh(ctx);

        // ...and keep it fresh afterwards
        ctx.run_interval(REFRESH_INTERVAL, Self::refresh);
    }
}

/// Re-fetch every feed from the content repository.
struct Refresh;

impl Message for Refresh {
    type Result = Result<(), ()>;
}

impl Handler<Refresh> for Updater {
    type Result = ResponseActFuture<Self, <Refresh as Message>::Result>;

    fn handle(&mut self, _: Refresh, _: &mut Self::Context) -> Self::Result {
        let feed_manager = self.feed_manager.clone();

        Box::pin(actix::fut::wrap_future(async move {
            log::debug!("Refreshing the board");

            feed_manager.refresh_all().await.map_err(|e| {
                log::error!("Could not refresh the board: {}", e);
            })?;

            log::info!("Board refreshed");

            Ok(())
        }))
    }
}
