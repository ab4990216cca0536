use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Instant;
use log::{info, warn};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionJob, ConversionResult, JobSummary};
use crate::models::event::{progress_percent, JobEvent};
use crate::models::font::{ConvertedFont, FontFormat, SourceFlavor};
use crate::service::error::{ConvertError, ConvertResult};
use crate::service::traits::i_service::FontCodecTrait;
use crate::utils::file::{is_same_file, read_input_font, write_output_font};
use crate::utils::utils::{display_name, format_file_size, output_path_for};

pub struct ConversionFacade {
    codec: Box<dyn FontCodecTrait>,
}

impl ConversionFacade {
    pub fn new(codec: Box<dyn FontCodecTrait>) -> Self {
        ConversionFacade { codec }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, job: &ConversionJob, events: &Sender<JobEvent>) -> JobSummary {
        let start = Instant::now();
        let total = job.input_files.len();
        info!(
            "開始轉換 {} 個檔案，目標格式：{}，輸出目錄：{}",
            total,
            job.output_format,
            job.output_dir.display()
        );
        // 接收端可能已關閉，送出失敗不影響轉換
        let _ = events.send(JobEvent::Started { total });

        let mut results = Vec::with_capacity(total);
        for (index, input) in job.input_files.iter().enumerate() {
            let _ = events.send(JobEvent::FileStarted {
                index,
                total,
                source: input.clone(),
            });

            let result = match self.convert_one(input, job.output_format, &job.output_dir) {
                Ok((output_path, written_as)) => {
                    ConversionResult::succeeded(input.clone(), job.output_format, output_path, written_as)
                }
                Err(e) => {
                    warn!("轉換失敗：{}，原因：{}", input.display(), e);
                    ConversionResult::failed(input.clone(), job.output_format, e.to_string())
                }
            };

            let _ = events.send(JobEvent::FileFinished {
                index,
                total,
                percent: progress_percent(index + 1, total),
                result: result.clone(),
            });
            results.push(result);
        }

        let summary = JobSummary {
            results,
            elapsed: start.elapsed(),
        };
        info!(
            "轉換結束：成功 {} 個，失敗 {} 個，耗時 {:.2} 秒",
            summary.succeeded(),
            summary.failed(),
            summary.elapsed.as_secs_f64()
        );
        let _ = events.send(JobEvent::Finished(summary.clone()));
        summary
    }
}

impl ConversionFacade {
    fn convert_one(&self, input: &Path, target: FontFormat, output_dir: &Path) -> ConvertResult<(PathBuf, FontFormat)> {
        let data = read_input_font(input)?;
        let converted = self.convert_data(&data, target)?;

        fs::create_dir_all(output_dir).map_err(|e| ConvertError::io(output_dir, e))?;
        let output_path = output_path_for(input, output_dir, converted.written_as);

        if is_same_file(input, &output_path) && converted.data == data {
            info!("輸出與來源為同一檔案且內容相同，略過寫入：{}", output_path.display());
        } else {
            write_output_font(&output_path, &converted.data)?;
            info!(
                "寫出 {}（{}），大小：{}",
                display_name(&output_path),
                converted.written_as,
                format_file_size(converted.data.len())
            );
        }
        Ok((output_path, converted.written_as))
    }

    /// 先驗證來源，同格式直接複製，其餘交給轉換元件
    fn convert_data(&self, data: &[u8], target: FontFormat) -> ConvertResult<ConvertedFont> {
        if data.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let flavor = self.codec.validate(data)?;
        if flavor.native_format() == Some(target) {
            return Ok(ConvertedFont {
                data: data.to_vec(),
                written_as: target,
            });
        }
        self.codec.convert(data, target)
    }
}
