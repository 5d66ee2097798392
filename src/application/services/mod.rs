mod cleaning_service;

pub use cleaning_service::CleaningService;
