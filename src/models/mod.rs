pub mod copy_record;
pub mod file_entry;

pub use copy_record::CopyRecord;
pub use file_entry::{has_pdf_extension, FileEntry};
