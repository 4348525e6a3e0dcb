pub mod dictionary;
pub mod observability;
pub mod ocr;
pub mod persistence;
