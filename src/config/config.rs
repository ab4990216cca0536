use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "font_converter",
    about = "Desktop font converter (TTF, OTF, WOFF, WOFF2, EOT)",
    long_about = "Opens the graphical font converter. All conversion options are chosen in the window; the only launch option controls logging."
)]
pub struct Cli {
    #[arg(long, value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
}

pub fn validate_output_dir(path: &Path) -> io::Result<&Path> {
    if path.exists() && !path.is_dir() {
        log::error!("輸出路徑不是目錄：{}", path.display());
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path '{}' is not a directory", path.display()),
        ));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_is_optional_and_checked() {
        let cli = Cli::try_parse_from(["font_converter"]).unwrap();
        assert!(cli.log_level.is_none());

        let cli = Cli::try_parse_from(["font_converter", "--log-level", "warn"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("warn"));

        assert!(Cli::try_parse_from(["font_converter", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn output_dir_must_not_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, b"x").unwrap();
        assert!(validate_output_dir(&file).is_err());
        assert!(validate_output_dir(dir.path()).is_ok());
        assert!(validate_output_dir(&dir.path().join("new")).is_ok());
    }
}
