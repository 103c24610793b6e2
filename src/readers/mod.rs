pub mod concurrent_reader;
pub mod fire_reader;

pub use concurrent_reader::ConcurrentReader;
pub use fire_reader::{ColumnLayout, FireReader, RowOutcome};
