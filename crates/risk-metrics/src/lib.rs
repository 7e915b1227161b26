pub mod aligner;
pub mod calculator;
pub mod returns;
pub mod stats;

pub use aligner::align;
pub use calculator::MetricsCalculator;
