#[cfg(test)]
mod tests {
    use rollcall::db::db::Db;
    use rollcall::libs::config::{Config, DatabaseConfig, CONFIG_FILE_NAME};
    use rollcall::libs::data_storage::{DataStorage, APP_NAME, VENDOR_NAME};
    use rollcall::libs::logging::LogConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("nested").join("config.json")
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.path, None);
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.database.connection_timeout_ms, 5_000);
        assert_eq!(config.database.busy_timeout_ms, 5_000);
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.log.level, "info");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.database.path = Some(PathBuf::from("/srv/rollcall/records.db"));
        config.database.pool_size = 3;
        config.log.format = "json".to_string();

        config.save_to(&ctx.config_path()).unwrap();
        let loaded = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_is_completed_with_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "database": { "busy_timeout_ms": 250 } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.database.pool_size, DatabaseConfig::default().pool_size);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_configured_path_is_used() {
        // ROLLCALL_DB takes precedence when set; the test only asserts the
        // configured path when the variable is absent.
        if std::env::var("ROLLCALL_DB").is_ok() {
            return;
        }
        let config = DatabaseConfig {
            path: Some(PathBuf::from("/tmp/records.db")),
            ..DatabaseConfig::default()
        };
        assert_eq!(Db::resolve_path(&config).unwrap(), PathBuf::from("/tmp/records.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directory_on_first_use(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join(VENDOR_NAME).join(APP_NAME);
        let storage = DataStorage::at(&base);
        assert!(!base.exists());

        let config_path = storage.get_path(CONFIG_FILE_NAME).unwrap();

        assert!(base.is_dir());
        assert_eq!(config_path, base.join("config.json"));
        Config::default().save_to(&config_path).unwrap();
        assert_eq!(Config::read_from(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_default_data_directory_layout() {
        let storage = DataStorage::new();
        assert!(storage.base_path().ends_with("rollcall/rollcall"));
    }
}
