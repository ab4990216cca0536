use std::path::{Path, PathBuf};
use log::{error, info, warn};
use crate::config::config::validate_output_dir;
use crate::config::ports::AppConfig;
use crate::facade::job_runner::{JobHandle, JobRunner};
use crate::models::conversion::{ConversionJob, JobSummary};
use crate::models::event::JobEvent;
use crate::models::font::FontFormat;
use crate::utils::file::{collect_font_files, push_unique};
use crate::utils::utils::{display_name, timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub time: String,
    pub kind: StatusKind,
    pub text: String,
}

/// 視窗的狀態：選取的檔案、格式、輸出目錄與執行中的工作
pub struct ShellState {
    pub files: Vec<PathBuf>,
    pub format: FontFormat,
    pub output_dir: Option<PathBuf>,
    pub status: Vec<StatusLine>,
    pub progress: u8,
    /// 最近一次完成的彙總，顯示於完成對話框
    pub summary: Option<JobSummary>,
    running: Option<JobHandle>,
}

impl ShellState {
    pub fn new(config: &AppConfig) -> Self {
        ShellState {
            files: Vec::new(),
            format: config.default_format,
            output_dir: config.output_dir.clone(),
            status: Vec::new(),
            progress: 0,
            summary: None,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// 以單一檔案取代目前清單
    pub fn select_single(&mut self, path: PathBuf) {
        if self.is_running() {
            return;
        }
        info!("選取單一字型：{}", path.display());
        self.files = vec![path];
    }

    /// 加入多個檔案，略過重複項目
    pub fn add_files(&mut self, paths: Vec<PathBuf>) -> usize {
        if self.is_running() {
            return 0;
        }
        let added = push_unique(&mut self.files, paths);
        info!("加入 {} 個字型，清單共 {} 個", added, self.files.len());
        added
    }

    pub fn add_folder(&mut self, dir: &Path) -> usize {
        if self.is_running() {
            return 0;
        }
        match collect_font_files(dir) {
            Ok(found) => {
                let added = push_unique(&mut self.files, found);
                self.push_status(
                    StatusKind::Info,
                    format!("Added {} font(s) from {}", added, dir.display()),
                );
                added
            }
            Err(e) => {
                warn!("無法掃描目錄 {}：{}", dir.display(), e);
                self.push_status(StatusKind::Error, format!("Cannot scan {}: {}", dir.display(), e));
                0
            }
        }
    }

    pub fn clear_files(&mut self) {
        if self.is_running() {
            return;
        }
        self.files.clear();
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        if self.is_running() {
            return;
        }
        if let Err(e) = validate_output_dir(&dir) {
            self.push_status(StatusKind::Error, e.to_string());
            return;
        }
        info!("輸出目錄：{}", dir.display());
        self.output_dir = Some(dir);
    }

    pub fn output_dir_label(&self) -> String {
        match &self.output_dir {
            Some(dir) => format!("Output Directory: {}", dir.display()),
            None => "No output directory selected".to_string(),
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(|f| display_name(f)).collect()
    }

    pub fn can_start(&self) -> bool {
        !self.is_running() && !self.files.is_empty() && self.output_dir.is_some()
    }

    /// 以目前的選擇建立工作並交給背景執行緒
    pub fn start(&mut self, runner: &JobRunner) -> bool {
        if !self.can_start() {
            return false;
        }
        let Some(output_dir) = self.output_dir.clone() else {
            return false;
        };
        let job = ConversionJob::new(self.files.clone(), self.format, output_dir);
        match runner.start(job) {
            Ok(handle) => {
                self.progress = 0;
                self.summary = None;
                self.running = Some(handle);
                true
            }
            Err(e) => {
                error!("無法啟動背景轉換：{}", e);
                self.push_status(StatusKind::Error, format!("Could not start conversion: {}", e));
                false
            }
        }
    }

    /// 取出背景事件並更新狀態，返回是否仍在執行
    pub fn poll(&mut self) -> bool {
        let Some(handle) = &self.running else {
            return false;
        };
        let drained = handle.drain();
        let mut finished = false;
        for event in drained.events {
            finished |= matches!(event, JobEvent::Finished(_));
            self.apply(event);
        }
        if finished {
            self.running = None;
        } else if drained.disconnected {
            error!("背景轉換執行緒未送出完成事件即結束");
            self.push_status(StatusKind::Error, "Conversion worker stopped unexpectedly".to_string());
            self.running = None;
        }
        self.is_running()
    }

    pub fn dismiss_summary(&mut self) {
        self.summary = None;
    }

    fn apply(&mut self, event: JobEvent) {
        match event {
            JobEvent::Started { total } => {
                self.push_status(StatusKind::Info, format!("Starting conversion of {} file(s) to {}", total, self.format));
            }
            JobEvent::FileStarted { source, .. } => {
                self.push_status(StatusKind::Info, format!("Converting: {}", display_name(&source)));
            }
            JobEvent::FileFinished { percent, result, .. } => {
                self.progress = percent;
                let kind = if !result.success {
                    StatusKind::Error
                } else if result.is_substituted() {
                    StatusKind::Warning
                } else {
                    StatusKind::Success
                };
                self.push_status(kind, result.describe());
            }
            JobEvent::Finished(summary) => {
                let kind = if summary.failed() == 0 {
                    StatusKind::Success
                } else {
                    StatusKind::Warning
                };
                self.push_status(kind, summary.message());
                self.progress = 100;
                self.summary = Some(summary);
            }
        }
    }

    fn push_status(&mut self, kind: StatusKind, text: String) {
        self.status.push(StatusLine {
            time: timestamp(),
            kind,
            text,
        });
    }
}
