mod language_detector;

pub use language_detector::{LanguageDetector, LanguageDetectorError};
