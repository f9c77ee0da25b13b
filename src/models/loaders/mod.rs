pub mod text_loader;

pub use text_loader::{load_all_text_files, load_text_to_document};
