//! 外部训练器启动
//!
//! 服务端只负责写出场景文档并拉起桌面训练器，训练器本身不在本服务内。

mod process;

pub use process::ProcessTrainerLauncher;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::export::TrainerDocument;

/// 一次启动的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub document_path: String,
    /// 未配置可执行文件时为 false
    pub launched: bool,
}

#[async_trait::async_trait]
pub trait TrainerLauncher: Send + Sync {
    /// 写出文档并启动训练器
    async fn launch(&self, document: &TrainerDocument) -> Result<LaunchReport>;
}

pub fn create_launcher(config: &AppConfig) -> Arc<dyn TrainerLauncher> {
    Arc::new(ProcessTrainerLauncher::from_config(&config.trainer))
}
