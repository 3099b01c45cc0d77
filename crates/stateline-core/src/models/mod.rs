mod event_fact;
mod interval_fact;
mod source_mode;
mod sparse_row;

pub use event_fact::EventFact;
pub use interval_fact::IntervalFact;
pub use source_mode::SourceMode;
pub use sparse_row::SparseRow;
