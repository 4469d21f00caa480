pub use crate::appdata::AppData;
pub use crate::config::Config;
pub use crate::store::Store;
