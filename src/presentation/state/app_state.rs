use std::sync::Arc;

use crate::application::ports::LanguageDetector;
use crate::application::services::CleaningService;

pub struct AppState<D>
where
    D: LanguageDetector,
{
    pub cleaning_service: Arc<CleaningService<D>>,
}

impl<D> Clone for AppState<D>
where
    D: LanguageDetector,
{
    fn clone(&self) -> Self {
        Self {
            cleaning_service: Arc::clone(&self.cleaning_service),
        }
    }
}
