mod cleaned_document;
mod language_tag;

pub use cleaned_document::CleanedDocument;
pub use language_tag::LanguageTag;
