pub mod extract_service;
pub mod persist_service;
pub mod warn_writer;

pub use extract_service::{extract_questions_and_answers, Extractor};
pub use persist_service::{OutputFormat, PersistService};
pub use warn_writer::WarnWriter;
