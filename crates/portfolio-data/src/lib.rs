//! Flat tabular file interface: holdings and benchmark loaders, summary
//! report writer. The only durable artifacts the pipeline touches.

pub mod benchmark;
pub mod holdings;
pub mod summary;

pub use benchmark::{load_benchmark, parse_benchmark};
pub use holdings::{load_holdings, parse_holdings};
pub use summary::{read_summary, write_summary};
