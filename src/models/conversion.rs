use std::path::PathBuf;
use std::time::Duration;
use crate::models::font::FontFormat;

/// 一次轉換工作，開始後不再變動
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input_files: Vec<PathBuf>,
    pub output_format: FontFormat,
    pub output_dir: PathBuf,
}

impl ConversionJob {
    pub fn new(input_files: Vec<PathBuf>, output_format: FontFormat, output_dir: impl Into<PathBuf>) -> Self {
        ConversionJob {
            input_files,
            output_format,
            output_dir: output_dir.into(),
        }
    }
}

/// 單一檔案的轉換結果
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub source: PathBuf,
    pub requested: FontFormat,
    pub success: bool,
    pub error: Option<String>,
    pub output_path: Option<PathBuf>,
    /// 實際寫出的格式，EOT/OTF 回退時與 requested 不同
    pub written_as: Option<FontFormat>,
}

impl ConversionResult {
    pub fn succeeded(source: PathBuf, requested: FontFormat, output_path: PathBuf, written_as: FontFormat) -> Self {
        ConversionResult {
            source,
            requested,
            success: true,
            error: None,
            output_path: Some(output_path),
            written_as: Some(written_as),
        }
    }

    pub fn failed(source: PathBuf, requested: FontFormat, error: impl Into<String>) -> Self {
        ConversionResult {
            source,
            requested,
            success: false,
            error: Some(error.into()),
            output_path: None,
            written_as: None,
        }
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self.written_as, Some(written) if written != self.requested)
    }

    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// 狀態列顯示的單行描述
    pub fn describe(&self) -> String {
        match (&self.error, &self.output_path, self.written_as) {
            (Some(err), _, _) => format!("Failed: {} ({})", self.source_name(), err),
            (None, Some(path), Some(written)) if written != self.requested => format!(
                "Converted: {} -> {} ({} requested, written as {})",
                self.source_name(),
                path.display(),
                self.requested,
                written
            ),
            (None, Some(path), _) => format!("Converted: {} -> {}", self.source_name(), path.display()),
            _ => format!("Converted: {}", self.source_name()),
        }
    }
}

/// 整批轉換的彙總，由完成事件交給介面
#[derive(Debug, Clone, Default)]
pub struct JobSummary {
    pub results: Vec<ConversionResult>,
    pub elapsed: Duration,
}

impl JobSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// 依（要求格式, 實際格式）分組的替代寫出說明
    pub fn substitution_notes(&self) -> Vec<String> {
        let mut groups: Vec<(FontFormat, FontFormat, usize)> = Vec::new();
        for r in self.results.iter().filter(|r| r.is_substituted()) {
            let Some(written) = r.written_as else { continue };
            match groups.iter_mut().find(|(req, w, _)| *req == r.requested && *w == written) {
                Some(group) => group.2 += 1,
                None => groups.push((r.requested, written, 1)),
            }
        }
        groups
            .into_iter()
            .map(|(requested, written, count)| {
                format!("{} file(s) were written as {} instead of {}", count, written, requested)
            })
            .collect()
    }

    pub fn message(&self) -> String {
        let total = self.total();
        let ok = self.succeeded();
        if ok == total {
            format!("All {} files converted successfully!", total)
        } else {
            format!("{} out of {} files converted successfully", ok, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_is_detected_from_written_format() {
        let r = ConversionResult::succeeded(
            PathBuf::from("in/a.woff"),
            FontFormat::Eot,
            PathBuf::from("out/a.ttf"),
            FontFormat::Ttf,
        );
        assert!(r.is_substituted());
        assert!(r.describe().contains("EOT requested, written as TTF"));

        let plain = ConversionResult::succeeded(
            PathBuf::from("in/a.ttf"),
            FontFormat::Woff,
            PathBuf::from("out/a.woff"),
            FontFormat::Woff,
        );
        assert!(!plain.is_substituted());
    }

    #[test]
    fn summary_message_reflects_failures() {
        let mut summary = JobSummary::default();
        summary.results.push(ConversionResult::failed(PathBuf::from("x.ttf"), FontFormat::Ttf, "boom"));
        summary.results.push(ConversionResult::succeeded(
            PathBuf::from("y.ttf"),
            FontFormat::Ttf,
            PathBuf::from("o/y.ttf"),
            FontFormat::Ttf,
        ));
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.message(), "1 out of 2 files converted successfully");
        assert_eq!(summary.failures().count(), 1);

        summary.results.remove(0);
        assert_eq!(summary.message(), "All 1 files converted successfully!");
    }

    #[test]
    fn substitution_notes_name_the_actual_formats() {
        let summary = JobSummary {
            results: vec![
                ConversionResult::succeeded(PathBuf::from("a.ttf"), FontFormat::Otf, PathBuf::from("o/a.ttf"), FontFormat::Ttf),
                ConversionResult::succeeded(PathBuf::from("b.otf"), FontFormat::Otf, PathBuf::from("o/b.otf"), FontFormat::Otf),
                ConversionResult::succeeded(PathBuf::from("c.ttf"), FontFormat::Otf, PathBuf::from("o/c.ttf"), FontFormat::Ttf),
                ConversionResult::failed(PathBuf::from("d.ttf"), FontFormat::Otf, "file is empty"),
            ],
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            summary.substitution_notes(),
            vec!["2 file(s) were written as TTF instead of OTF".to_string()]
        );

        let clean = JobSummary {
            results: vec![summary.results[1].clone()],
            elapsed: Duration::ZERO,
        };
        assert!(clean.substitution_notes().is_empty());
    }
}
