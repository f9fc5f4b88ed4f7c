use std::env;

pub struct Config {
    pub discord_token: String,
    pub data_dir: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let discord_token = env::var("DISCORD_TOKEN").map_err(|_| "DISCORD_TOKEN must be set")?;

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Ok(Self {
            discord_token,
            data_dir,
            bind_addr,
        })
    }
}
