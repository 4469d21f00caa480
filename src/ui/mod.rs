//! Terminal presentation layer for the board.
//!
//! The view pieces a browser would provide are narrowed to three seams: a
//! progress indicator bracketing a request, a notifier for transient
//! messages, and a reloader that replaces the view's state wholesale.

use futures::future::LocalBoxFuture;

mod state;

pub mod console;
pub mod refresh;

pub use state::AppState;

/// Transient visual cue bracketing a request's lifetime.
pub trait Progress {
    fn start(&self);
    fn done(&self);
}

/// Transient user-facing message, success or failure flavored.
pub trait Notify {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// One-shot full reload of the view's state.
pub trait Reload {
    fn reload(&self) -> LocalBoxFuture<'_, ()>;
}
