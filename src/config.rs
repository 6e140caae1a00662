#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let max_batch_size = std::env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|size: &usize| *size > 0)
            .unwrap_or(1000);

        Self {
            port,
            max_batch_size,
        }
    }
}
