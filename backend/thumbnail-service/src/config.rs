//! Configuration management for thumbnail-service
//!
//! Loads storage client configuration from environment variables with sensible defaults.
//! Credentials always come from the default provider chain (Lambda role, env, profile).
//! Thumbnail size and output format are fixed and not configurable.

#[derive(Clone, Debug)]
pub struct Config {
    pub s3: S3Config,
}

#[derive(Clone, Debug)]
pub struct S3Config {
    pub region: String,
    /// S3-compatible endpoint (e.g. MinIO) for local runs
    pub endpoint: Option<String>,
    pub force_path_style: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            s3: S3Config {
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                endpoint: non_empty_var("S3_ENDPOINT"),
                force_path_style: std::env::var("S3_FORCE_PATH_STYLE")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),
            },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
