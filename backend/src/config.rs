use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port_value = env::var("SHADE_PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_value
            .parse()
            .map_err(|_| anyhow!("Invalid SHADE_PORT value: {}", port_value))?;

        let static_dir = env::var("SHADE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./frontend/dist"));

        Ok(Config { port, static_dir })
    }
}
