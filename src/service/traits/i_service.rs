use crate::models::font::{ConvertedFont, FontFormat, SourceFlavor};
use crate::service::error::ConvertResult;

// 字型格式轉換接口，負責把原始檔案資料轉為目標格式
pub trait FontCodecTrait: Send + Sync {
    /// 驗證來源資料是可讀取的字型
    /// # 參數
    /// - data: 來源檔案的完整內容
    /// # 回傳
    /// - 成功時返回來源的格式，無法解析時返回轉換錯誤
    fn validate(&self, data: &[u8]) -> ConvertResult<SourceFlavor>;

    /// 將字型資料轉換為目標格式
    /// # 參數
    /// - data: 來源檔案的完整內容
    /// - target: 使用者要求的輸出格式
    /// # 回傳
    /// - 成功時返回輸出資料與實際寫出的格式（可能因回退而不同），失敗時返回轉換錯誤
    fn convert(&self, data: &[u8], target: FontFormat) -> ConvertResult<ConvertedFont>;
}
