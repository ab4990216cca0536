use std::io;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::font::FontFormat;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl Default for DefaultConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            log_level: "info".to_string(),
            default_format: FontFormat::Ttf,
            output_dir: None, // 由使用者在視窗中選擇
            window_title: "Font Converter".to_string(),
            window_size: [800.0, 600.0],
        })
    }
}
