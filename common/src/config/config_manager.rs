use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one config value. A missing source yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        delay_ms: u64,
        name: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                delay_ms: 500,
                name: "sample".to_string(),
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() {
                return Err("name must not be empty".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentProvider, SampleConfig, YamlConfigSerializer> {
        let provider = MemoryContentProvider {
            content: RefCell::new(content.map(str::to_string)),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_reads_yaml() {
        let manager = memory_manager(Some("delay_ms: 10\nname: custom\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.delay_ms, 10);
        assert_eq!(config.name, "custom");
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = memory_manager(Some("delay_ms: 10\nname: ''\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"), "{err}");

        let manager = memory_manager(Some("delay_ms: [oops"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_then_get() {
        let manager = memory_manager(None);
        let config = SampleConfig {
            delay_ms: 0,
            name: "saved".to_string(),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let invalid = SampleConfig {
            name: String::new(),
            ..config
        };
        assert!(manager.set_config(&invalid).is_err());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_common_config_{}.yaml", random_number));

        let manager: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        let config = SampleConfig {
            delay_ms: 42,
            name: "file".to_string(),
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }
}
