use std::sync::mpsc::Sender;
use crate::models::conversion::{ConversionJob, JobSummary};
use crate::models::event::JobEvent;

// Facade 接口，負責協調整批字型轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依序轉換工作中的每個檔案，單檔失敗不中斷整批
    /// # 參數
    /// - job: 本次轉換的輸入檔案、目標格式與輸出目錄
    /// - events: 進度事件的送出端，接收端關閉時事件會被丟棄
    /// # 回傳
    /// - 每個輸入檔案恰好一筆結果的彙總
    fn execute_conversion(&self, job: &ConversionJob, events: &Sender<JobEvent>) -> JobSummary;
}
