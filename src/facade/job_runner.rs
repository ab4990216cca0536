use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use log::info;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionJob, JobSummary};
use crate::models::event::JobEvent;
use crate::service::font::FontService;

/// 在背景執行緒啟動轉換工作
pub struct JobRunner {
    facade: Arc<dyn ConversionFacadeTrait>,
}

impl JobRunner {
    pub fn new(facade: Arc<dyn ConversionFacadeTrait>) -> Self {
        JobRunner { facade }
    }

    /// 使用 FontService 作為轉換元件
    pub fn with_font_service() -> Self {
        JobRunner::new(Arc::new(ConversionFacade::new(Box::new(FontService::new()))))
    }

    /// 啟動工作並立即返回，事件經由 JobHandle 取得
    pub fn start(&self, job: ConversionJob) -> io::Result<JobHandle> {
        let (sender, receiver) = mpsc::channel();
        let facade = Arc::clone(&self.facade);
        let total = job.input_files.len();
        let thread = thread::Builder::new()
            .name("font-converter-worker".to_string())
            .spawn(move || facade.execute_conversion(&job, &sender))?;
        info!("背景轉換已啟動，共 {} 個檔案", total);
        Ok(JobHandle {
            receiver,
            thread: Some(thread),
        })
    }
}

/// 一次 drain 取得的事件，以及背景執行緒是否已結束送出
#[derive(Debug, Default)]
pub struct Drained {
    pub events: Vec<JobEvent>,
    pub disconnected: bool,
}

pub struct JobHandle {
    receiver: Receiver<JobEvent>,
    thread: Option<JoinHandle<JobSummary>>,
}

impl JobHandle {
    /// 不阻塞地取出目前所有事件
    pub fn drain(&self) -> Drained {
        let mut drained = Drained::default();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => drained.events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    drained.disconnected = true;
                    break;
                }
            }
        }
        drained
    }

    /// 阻塞直到下一個事件，背景執行緒結束後返回 None
    pub fn recv(&self) -> Option<JobEvent> {
        self.receiver.recv().ok()
    }

    /// 等待背景執行緒結束並取回彙總
    pub fn wait(mut self) -> io::Result<JobSummary> {
        let thread = self
            .thread
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "背景執行緒已被取回"))?;
        thread
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "背景轉換執行緒異常終止"))
    }
}
