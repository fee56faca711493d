pub mod copier;
pub mod folder_selector;
pub mod pdf_picker;
pub mod run_log;

pub use copier::{copy_to_output, destination_path};
pub use folder_selector::select_folders;
pub use pdf_picker::pick_latest_pdf;
pub use run_log::{RunLog, LOG_FILE_NAME};
