use std::io;
use clap::Parser;
use crate::action::gui::run_gui;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::job_runner::JobRunner;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help 與 --version
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string())),
    };

    // 未提供任何參數時使用預設配置
    let config_port: Box<dyn ConfigPort> = if cli.log_level.is_none() {
        Box::new(DefaultConfigAdapter::new())
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };
    let config = ConfigService::new(config_port).get_config()?;
    setup_logging(&config.log_level)?;
    log::info!("啟動字型轉換器，日誌等級：{}", config.log_level);

    run_gui(config, JobRunner::with_font_service())
}

// CLI 配置適配器，在預設配置上覆寫啟動參數
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let mut config = DefaultConfigAdapter::new().get_config()?;
        if let Some(level) = &self.cli.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_adapter_overrides_log_level_only() {
        let cli = Cli::try_parse_from(["font_converter", "--log-level", "error"]).unwrap();
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        let defaults = DefaultConfigAdapter::new().get_config().unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.default_format, defaults.default_format);
        assert_eq!(config.window_title, defaults.window_title);
    }

    #[test]
    fn unknown_arguments_are_rejected_before_launch() {
        let err = process_args(vec!["font_converter".to_string(), "--convert".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
