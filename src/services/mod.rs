pub mod aggregator;
pub mod report_writer;

pub use aggregator::{Aggregate, ScoreAggregator};
pub use report_writer::{Persister, ReportWriter};
