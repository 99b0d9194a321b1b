mod records;

pub use records::{list_record_files, load_record, RecordStore};
