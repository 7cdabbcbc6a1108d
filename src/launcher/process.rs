use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{LaunchReport, TrainerLauncher};
use crate::config::TrainerConfig;
use crate::errors::{Result, TrainerError};
use crate::models::export::TrainerDocument;

/// 以子进程方式运行训练器
pub struct ProcessTrainerLauncher {
    document_path: PathBuf,
    executable: String,
    process_name: String,
}

impl ProcessTrainerLauncher {
    pub fn new(
        document_path: impl Into<PathBuf>,
        executable: impl Into<String>,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            document_path: document_path.into(),
            executable: executable.into(),
            process_name: process_name.into(),
        }
    }

    pub fn from_config(config: &TrainerConfig) -> Self {
        Self::new(
            &config.document_path,
            config.executable.clone(),
            config.process_name.clone(),
        )
    }

    async fn write_document(&self, document: &TrainerDocument) -> Result<()> {
        let body = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.document_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                TrainerError::file_operation(format!(
                    "创建文档目录失败 {}: {e}",
                    parent.display()
                ))
            })?;
        }

        tokio::fs::write(&self.document_path, body)
            .await
            .map_err(|e| {
                TrainerError::file_operation(format!(
                    "写入场景文档失败 {}: {e}",
                    self.document_path.display()
                ))
            })
    }

    // 结束旧实例，失败（包括进程不存在）忽略
    async fn kill_previous(&self) {
        if self.process_name.is_empty() {
            return;
        }

        let mut cmd = kill_command(&self.process_name);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match cmd.status().await {
            Ok(status) => debug!(
                "Kill of previous trainer '{}' exited with {}",
                self.process_name, status
            ),
            Err(e) => debug!(
                "Could not run kill command for '{}': {}",
                self.process_name, e
            ),
        }
    }

    fn spawn(&self) -> Result<()> {
        let child = Command::new(&self.executable)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false)
            .spawn()
            .map_err(|e| {
                TrainerError::trainer_launch(format!("启动训练器失败 {}: {e}", self.executable))
            })?;

        info!(
            "Trainer started: {} (pid {:?})",
            self.executable,
            child.id()
        );
        Ok(())
    }
}

#[cfg(windows)]
fn kill_command(process_name: &str) -> Command {
    let mut cmd = Command::new("taskkill");
    cmd.args(["/F", "/IM", process_name]);
    cmd
}

#[cfg(not(windows))]
fn kill_command(process_name: &str) -> Command {
    let mut cmd = Command::new("pkill");
    cmd.args(["-x", process_name]);
    cmd
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[async_trait::async_trait]
impl TrainerLauncher for ProcessTrainerLauncher {
    async fn launch(&self, document: &TrainerDocument) -> Result<LaunchReport> {
        self.write_document(document).await?;

        let document_path = display_path(&self.document_path);

        if self.executable.is_empty() {
            warn!(
                "Trainer executable not configured, document written to {} only",
                document_path
            );
            return Ok(LaunchReport {
                document_path,
                launched: false,
            });
        }

        self.kill_previous().await;
        self.spawn()?;

        Ok(LaunchReport {
            document_path,
            launched: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::entities::{Accident, InstrumentModel, Sensor};
    use crate::models::export::{ScenarioGraph, build_trainer_document};
    use crate::models::scenarios::entities::Scenario;
    use std::collections::BTreeMap;

    fn sample_document() -> TrainerDocument {
        let graph = ScenarioGraph {
            scenario: Scenario {
                id: 3,
                name: "Boiler".to_string(),
                location_id: 1,
                sensor_id: 2,
            },
            sensor: Sensor {
                id: 2,
                name: "PT-01".to_string(),
                kks: "10LAB10CP001".to_string(),
                model_id: 5,
            },
            model: InstrumentModel {
                id: 5,
                name: "Pressure".to_string(),
                sensor_type_id: 1,
                specification: BTreeMap::from([("Max Temp".to_string(), "100 C".to_string())]),
            },
            accidents: vec![Accident {
                id: 1,
                name: "Leak".to_string(),
                mechanical_accident: true,
                change_value: BTreeMap::new(),
            }],
        };
        build_trainer_document(9, graph)
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("trainer-launch-{}-{}", std::process::id(), rand::random::<u32>()))
            .join(name)
    }

    #[tokio::test]
    async fn test_writes_document_without_executable() {
        let path = scratch_path("scenario.json");
        let launcher = ProcessTrainerLauncher::new(&path, "", "");

        let report = launcher.launch(&sample_document()).await.unwrap();
        assert!(!report.launched);
        assert_eq!(report.document_path, display_path(&path));

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["response"]["id"], 9);
        assert_eq!(
            written["response"]["scenario"]["sensor"]["model"]["specification"]["max_temp"],
            "100 C"
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_missing_executable_is_launch_error() {
        let path = scratch_path("scenario.json");
        let launcher =
            ProcessTrainerLauncher::new(&path, "/nonexistent/trainer-binary", "");

        let err = launcher.launch(&sample_document()).await.unwrap_err();
        assert_eq!(err.class(), crate::errors::ErrorClass::Io);
        // 文档仍然已写出
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
