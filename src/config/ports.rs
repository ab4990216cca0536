use std::io;
use std::path::PathBuf;
use crate::models::font::FontFormat;

// 應用配置結構體，封裝啟動時的所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub default_format: FontFormat,
    pub output_dir: Option<PathBuf>,
    pub window_title: String,
    pub window_size: [f32; 2],
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
