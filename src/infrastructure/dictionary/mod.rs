mod gramota_client;

pub use gramota_client::{GramotaClient, generalized, parse_candidates};
