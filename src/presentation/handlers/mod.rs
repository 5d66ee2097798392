mod clean;
mod health;

pub use clean::{CleanRequest, CleanResponse, clean_handler};
pub use health::health_handler;
