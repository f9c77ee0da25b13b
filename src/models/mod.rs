pub mod loaders;
pub mod question;

pub use loaders::{load_all_text_files, load_text_to_document};
pub use question::{AnswerRecord, DocumentText, ExtractedPage, PageText, QuestionRecord};
