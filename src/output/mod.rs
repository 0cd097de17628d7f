pub mod binary;
pub mod record;
pub mod text;

pub use binary::{read_output, EncodedRecord, OutputFile};
pub use record::ResultRecord;
