use std::path::PathBuf;
use crate::models::conversion::{ConversionResult, JobSummary};

/// 背景工作送回介面執行緒的事件
#[derive(Debug, Clone)]
pub enum JobEvent {
    Started {
        total: usize,
    },
    FileStarted {
        index: usize,
        total: usize,
        source: PathBuf,
    },
    FileFinished {
        index: usize,
        total: usize,
        percent: u8,
        result: ConversionResult,
    },
    Finished(JobSummary),
}

/// 已完成 `completed` 個檔案時的百分比（無條件捨去）
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed.min(total) * 100) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_down_and_caps() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(3, 3), 100);
        assert_eq!(progress_percent(5, 3), 100);
        assert_eq!(progress_percent(0, 0), 100);
    }
}
