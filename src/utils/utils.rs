use std::io;
use std::path::{Path, PathBuf};
use chrono::Local;
use crate::models::font::FontFormat;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = parse_log_level(log_level);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))?;
    Ok(())
}

pub fn parse_log_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 狀態訊息前綴的時間戳
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// 輸出路徑：原始檔名（不含副檔名）加上實際格式的副檔名
pub fn output_path_for(input: &Path, output_dir: &Path, format: FontFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "font".to_string());
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

/// 顯示用的檔名
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_stem_and_target_extension() {
        let out = output_path_for(Path::new("/fonts/Inter-Bold.woff2"), Path::new("/out"), FontFormat::Ttf);
        assert_eq!(out, PathBuf::from("/out/Inter-Bold.ttf"));

        let dotted = output_path_for(Path::new("my.font.v2.otf"), Path::new("o"), FontFormat::Woff);
        assert_eq!(dotted, PathBuf::from("o/my.font.v2.woff"));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("warn"), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("verbose"), log::LevelFilter::Info);
    }

    #[test]
    fn file_size_switches_units() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name(Path::new("/a/b/c.ttf")), "c.ttf");
    }
}
