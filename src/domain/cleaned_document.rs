use super::language_tag::LanguageTag;

/// Result of running raw text through the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    pub text: String,
    pub sections: Vec<String>,
    pub language: LanguageTag,
}
