//! Network data retrieval for the trivia API.

mod api;

pub use api::{TriviaClient, endpoint_url};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
