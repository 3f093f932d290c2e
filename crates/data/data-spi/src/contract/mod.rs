//! Contract module containing reader traits

mod history_reader;

pub use history_reader::HistoryReader;
