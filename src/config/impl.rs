use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 常用环境变量到配置键的映射，优先级最高
const ENV_SHORTCUTS: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("JWT_SECRET", "jwt.secret"),
    ("DATABASE_URL", "database.url"),
    ("TRAINER_EXECUTABLE", "trainer.executable"),
    ("TRAINER_RESULT_TOKEN", "trainer.result_token"),
];

impl AppConfig {
    /// 加载顺序：内置默认值 < config.toml < config.{APP_ENV}.toml < TRAINER__* < 快捷环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            .add_source(
                Environment::with_prefix("TRAINER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_SHORTCUTS {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers.max(1));
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 拒绝无法运行的组合
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (JWT_SECRET)".to_string(),
            ));
        }
        if self.is_production() && self.jwt.secret == "change-me-in-production" {
            return Err(ConfigError::Message(
                "The default JWT secret cannot be used in production".to_string(),
            ));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::Message(
                "database.pool_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 全局配置；未调用 init 时按需加载，失败则退出进程
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| match Self::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            }
        })
    }

    /// 启动时调用一次
    pub fn init() -> Result<(), ConfigError> {
        APP_CONFIG
            .set(Self::load()?)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn result_feed_enabled(&self) -> bool {
        !self.trainer.result_token.is_empty()
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|path| !path.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.jwt.secret = secret.to_string();
        config
    }

    #[test]
    fn test_defaults_need_secret() {
        assert!(AppConfig::default().validate().is_err());
        assert!(with_secret("s3cret").validate().is_ok());
    }

    #[test]
    fn test_production_rejects_placeholder_secret() {
        let mut config = with_secret("change-me-in-production");
        assert!(config.validate().is_ok());
        config.app.environment = "production".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_result_feed_toggle() {
        let mut config = with_secret("s3cret");
        assert!(!config.result_feed_enabled());
        config.trainer.result_token = "token".to_string();
        assert!(config.result_feed_enabled());
    }
}
