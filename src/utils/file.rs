use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use log::{info, warn};
use walkdir::WalkDir;
use crate::models::font::FontFormat;
use crate::service::error::{ConvertError, ConvertResult};

pub fn read_file_content(file_path: &Path) -> io::Result<(Vec<u8>, usize)> {
    let mut file = File::open(file_path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let file_size = buffer.len();
    Ok((buffer, file_size))
}

/// 確認輸入存在且為一般檔案後讀取內容
pub fn read_input_font(path: &Path) -> ConvertResult<Vec<u8>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConvertError::MissingInput(path.to_path_buf()));
        }
        Err(e) => return Err(ConvertError::io(path, e)),
    };
    if !metadata.is_file() {
        return Err(ConvertError::NotAFile(path.to_path_buf()));
    }
    let (data, _) = read_file_content(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(data)
}

pub fn write_output_font(path: &Path, data: &[u8]) -> ConvertResult<()> {
    fs::write(path, data).map_err(|e| ConvertError::io(path, e))
}

/// 兩個路徑是否指向同一個檔案
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn is_font_file(path: &Path) -> bool {
    FontFormat::from_path(path).is_some()
}

/// 遞迴收集目錄下所有字型檔案，依路徑排序
pub fn collect_font_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("目錄 '{}' 不存在", dir.display()),
        ));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("略過無法讀取的項目：{}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_font_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    info!("在 {} 找到 {} 個字型檔案", dir.display(), files.len());
    Ok(files)
}

/// 加入不重複的路徑，返回新增的數量
pub fn push_unique(files: &mut Vec<PathBuf>, candidates: impl IntoIterator<Item = PathBuf>) -> usize {
    let mut added = 0;
    for path in candidates {
        if !files.contains(&path) {
            files.push(path);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ghost.ttf");
        assert_matches!(read_input_font(&missing), Err(ConvertError::MissingInput(p)) if p == missing);
    }

    #[test]
    fn directory_input_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(read_input_font(dir.path()), Err(ConvertError::NotAFile(_)));
    }

    #[test]
    fn collects_fonts_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.TTF"), b"x").unwrap();
        fs::write(nested.join("a.woff2"), b"x").unwrap();
        fs::write(nested.join("notes.txt"), b"x").unwrap();

        let files = collect_font_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_font_file(f)));
    }

    #[test]
    fn collect_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_font_files(&dir.path().join("none")).is_err());
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut files = vec![PathBuf::from("a.ttf")];
        let added = push_unique(&mut files, vec![PathBuf::from("a.ttf"), PathBuf::from("b.otf"), PathBuf::from("b.otf")]);
        assert_eq!(added, 1);
        assert_eq!(files, vec![PathBuf::from("a.ttf"), PathBuf::from("b.otf")]);
    }

    #[test]
    fn same_file_follows_relative_components() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.ttf");
        fs::write(&file, b"x").unwrap();
        let indirect = dir.path().join(".").join("f.ttf");
        assert!(is_same_file(&file, &indirect));
        assert!(!is_same_file(&file, &dir.path().join("g.ttf")));
    }
}
