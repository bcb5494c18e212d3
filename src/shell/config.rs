use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_file: PathBuf,
}

impl Config {
    /// `TIMELOG_ADDR` and `TIMELOG_DATA_FILE`, with defaults suited to
    /// single-user local use.
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("TIMELOG_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()?;
        let data_file = std::env::var("TIMELOG_DATA_FILE")
            .unwrap_or_else(|_| "time-logs.json".to_string())
            .into();
        Ok(Self { addr, data_file })
    }
}
