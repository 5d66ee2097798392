mod mock_detector;
mod whatlang_detector;

pub use mock_detector::{FailingLanguageDetector, MockLanguageDetector};
pub use whatlang_detector::WhatlangDetector;
