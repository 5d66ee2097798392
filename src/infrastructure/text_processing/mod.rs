mod text_normalizer;

pub use text_normalizer::{clean, split_sections};
