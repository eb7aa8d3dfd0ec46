use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects.
// Identities are assigned by the store on insert.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub env: String,
    pub bind_address: String,
}

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

impl Configuration {
    pub fn new(env: &str) -> Self {
        Configuration {
            env: env.to_string(),
            bind_address: std::env::var("CATALOG_BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.env.as_str());
        assert!(!config.bind_address.is_empty());
    }
}
