pub mod folder_ctx;
pub mod folder_flow;

pub use folder_ctx::FolderCtx;
pub use folder_flow::{FolderFlow, FolderResult};
