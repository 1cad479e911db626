use crate::domain::summary::BaselineRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub range: RangeSettings,
    #[serde(default)]
    pub baseline: BaselineSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Range selected when the dashboard first loads.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RangeSettings {
    pub from: String,
    pub to: String,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            from: "2024-04-01".to_string(),
            to: "2024-05-01".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BaselineSettings {
    pub alert_count: u64,
    pub critical_alerts: u64,
    pub open_alerts: u64,
    pub closed_alerts: u64,
}

impl Default for BaselineSettings {
    fn default() -> Self {
        BaselineRecord::default().into()
    }
}

impl From<BaselineRecord> for BaselineSettings {
    fn from(record: BaselineRecord) -> Self {
        Self {
            alert_count: record.alert_count,
            critical_alerts: record.critical_alerts,
            open_alerts: record.open_alerts,
            closed_alerts: record.closed_alerts,
        }
    }
}

impl From<BaselineSettings> for BaselineRecord {
    fn from(settings: BaselineSettings) -> Self {
        Self {
            alert_count: settings.alert_count,
            critical_alerts: settings.critical_alerts,
            open_alerts: settings.open_alerts,
            closed_alerts: settings.closed_alerts,
        }
    }
}

/// Load `config/dashboard` (optional) with `ALERTS__SECTION__KEY` overrides.
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from("config/dashboard")
}

pub fn load_config_from(path: &str) -> anyhow::Result<AppConfig> {
    load_with_environment(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("ALERTS")
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(path: &str, env: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config_from("config/does-not-exist").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.range.from, "2024-04-01");
        assert_eq!(config.range.to, "2024-05-01");
        assert_eq!(BaselineRecord::from(config.baseline), BaselineRecord::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut vars = config::Map::new();
        vars.insert("ALERTS__BASELINE__ALERT_COUNT".to_string(), "500".to_string());
        vars.insert("ALERTS__SERVER__BIND".to_string(), "127.0.0.1:9090".to_string());
        vars.insert("ALERTS__RANGE__TO".to_string(), "2024-06-30".to_string());

        let config =
            load_with_environment("config/dashboard", environment().source(Some(vars))).unwrap();

        assert_eq!(config.baseline.alert_count, 500);
        assert_eq!(config.baseline.critical_alerts, 85);
        assert_eq!(config.server.bind, "127.0.0.1:9090");
        assert_eq!(config.range.from, "2024-04-01");
        assert_eq!(config.range.to, "2024-06-30");
    }

    #[test]
    fn test_file_overrides_baseline() {
        let path = std::env::temp_dir().join(format!("alerts-dashboard-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[range]\nfrom = \"2024-01-01\"\nto = \"2024-03-31\"\n\n[baseline]\nalert_count = 100\n",
        )
        .unwrap();

        let config = load_config_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.range.from, "2024-01-01");
        assert_eq!(config.baseline.alert_count, 100);
        assert_eq!(config.baseline.critical_alerts, 85);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }
}
