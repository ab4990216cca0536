use std::io;
use std::path::PathBuf;
use crate::models::font::{FontFormat, SourceFlavor};

/// 單一檔案轉換失敗的原因，Display 文字即顯示給使用者的訊息
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("input is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file is empty")]
    EmptyInput,

    #[error("unrecognised font signature")]
    UnknownFormat,

    #[error("font collections (.ttc) are not supported")]
    Collection,

    #[error("EOT input cannot be decoded; convert from TTF, OTF, WOFF or WOFF2")]
    EotInput,

    #[error("failed to decode {0} data")]
    Decode(SourceFlavor),

    #[error("failed to encode {0} output")]
    Encode(FontFormat),

    #[error("invalid font data: {0}")]
    InvalidFont(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = ConvertError::MissingInput(PathBuf::from("/nope/a.ttf"));
        assert_eq!(e.to_string(), "input file does not exist: /nope/a.ttf");
        assert_eq!(
            ConvertError::Decode(SourceFlavor::Woff2).to_string(),
            "failed to decode WOFF2 data"
        );
        assert_eq!(ConvertError::Encode(FontFormat::Woff).to_string(), "failed to encode WOFF output");
    }
}
