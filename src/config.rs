use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_DATA_PATH: &str = "CPAP_actions_open.xlsx";
pub const DEFAULT_SHEET: &str = "datasheet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub debug: bool,
    pub data_path: PathBuf,
    pub sheet: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let debug = lookup("APP_DEBUG").is_some_and(|value| is_truthy(&value));
        let data_path = lookup("ACTIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let sheet = lookup("ACTIONS_SHEET").unwrap_or_else(|| DEFAULT_SHEET.to_string());

        Self {
            addr: SocketAddr::new(host, port),
            debug,
            data_path,
            sheet,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8050)));
        assert!(!config.debug);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.data_path, PathBuf::from("CPAP_actions_open.xlsx"));
        assert_eq!(config.sheet, "datasheet");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("APP_DEBUG", "True"),
            ("ACTIONS_PATH", "/tmp/actions.xlsx"),
            ("ACTIONS_SHEET", "open"),
        ]);
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(config.debug);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.data_path, PathBuf::from("/tmp/actions.xlsx"));
        assert_eq!(config.sheet, "open");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config(&[("PORT", "http")]).addr.port(), DEFAULT_PORT);
        assert!(!config(&[("APP_DEBUG", "0")]).debug);
    }
}
