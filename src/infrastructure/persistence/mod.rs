mod json_usage_repository;

pub use json_usage_repository::JsonFileUsageRepository;
