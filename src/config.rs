//! Конфигурация из переменных окружения

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const DEFAULT_MODEL_PATH: &str = "model-reg.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const MODEL_PATH_VAR: &str = "SALES_MODEL_PATH";
pub const BIND_ADDR_VAR: &str = "SALES_BIND_ADDR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model_path = lookup(MODEL_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.trim().parse().map_err(|_| AppError::InvalidInput {
            field: BIND_ADDR_VAR.to_string(),
            message: format!("'{bind_addr}' is not a socket address"),
        })?;

        Ok(Self {
            model_path: PathBuf::from(model_path),
            bind_addr,
        })
    }

    /// Имя файла модели для показа на странице
    pub fn model_file_name(&self) -> String {
        self.model_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.model_path.display().to_string())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.model_file_name(), "model-reg.json");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (MODEL_PATH_VAR, "/srv/models/sales.json"),
            (BIND_ADDR_VAR, "127.0.0.1:9090"),
        ]))
        .unwrap();
        assert_eq!(config.model_path, PathBuf::from("/srv/models/sales.json"));
        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.model_file_name(), "sales.json");
    }

    #[test]
    fn test_blank_model_path_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[(MODEL_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn test_bad_bind_addr() {
        assert!(AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).is_err());
    }
}
