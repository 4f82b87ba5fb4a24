use std::num::NonZeroUsize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_QUERY_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub cache_capacity: NonZeroUsize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Baked in at build time for the WASM bundle
            base_url: option_env!("LISTY_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            cache_capacity: NonZeroUsize::new(DEFAULT_QUERY_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}
