mod health;
mod recover;
mod statistics;

pub use health::health_handler;
pub use recover::{recover_handler, recover_pairs_handler};
pub use statistics::statistics_handler;
