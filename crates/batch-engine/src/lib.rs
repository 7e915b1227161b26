pub mod dispatcher;
pub mod task;

pub use dispatcher::{group_by_ticker, run, HoldingsByTicker};
pub use task::process;
