//! Executes sandbox actions off the UI loop.
//!
//! One action at a time, in send order: the output log must list runs in
//! invocation order even when the run key is hammered, so there is no
//! per-run task spawning and no coalescing here.

use std::time::Duration;

use anyhow::Result;
use sandpit_core::{ContentType, ExecutionRecord, ExecutorRegistry, PreviewLauncher};
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::{Action, Event};

/// Pause before surfacing a simulated Python run, purely so the running
/// indicator is visible long enough to read. Not semantically required.
pub const SIMULATOR_SPINUP_DELAY: Duration = Duration::from_millis(400);

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let registry = ExecutorRegistry::new();
        let previewer = PreviewLauncher::new();

        while let Some(action) = rx.recv().await {
            match action {
                Action::RunCode { language, source } => {
                    event_tx.send(Event::ExecutionStarted {
                        language: language.clone(),
                    })?;

                    if language == "python" {
                        time::sleep(SIMULATOR_SPINUP_DELAY).await;
                    }

                    let lines = match registry.execute(&language, &source) {
                        Ok(output) => output.lines,
                        Err(err) => vec![format!("Error: {err}")],
                    };

                    let mut entry = vec![format!("> Analyzing and running {language} code...")];
                    entry.extend(lines);
                    entry.push(String::new());

                    event_tx.send(Event::ExecutionFinished(ExecutionRecord::new(
                        &language, entry,
                    )))?;
                }
                Action::OpenPreview { language, source } => {
                    let content_type = ContentType::resolve(&language, &source);
                    let report = previewer.open(&source, content_type);
                    event_tx.send(Event::PreviewReport(report))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    async fn next_finished(rx: &mut mpsc::UnboundedReceiver<Event>) -> ExecutionRecord {
        loop {
            match rx.recv().await.expect("event") {
                Event::ExecutionFinished(record) => return record,
                _ => continue,
            }
        }
    }

    #[tokio::test]
    async fn rapid_runs_finish_in_invocation_order() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        tokio::spawn(async move {
            ActionsService::start(event_tx, &mut action_rx).await.unwrap();
        });

        for n in [1, 2] {
            action_tx
                .send(Action::RunCode {
                    language: "javascript".to_string(),
                    source: format!("console.log({n})"),
                })
                .unwrap();
        }

        let first = next_finished(&mut event_rx).await;
        let second = next_finished(&mut event_rx).await;
        assert!(first.lines.contains(&"1".to_string()));
        assert!(second.lines.contains(&"2".to_string()));
    }

    #[tokio::test]
    async fn every_run_starts_with_the_analysis_header() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        tokio::spawn(async move {
            ActionsService::start(event_tx, &mut action_rx).await.unwrap();
        });

        action_tx
            .send(Action::RunCode {
                language: "python".to_string(),
                source: "print(\"hi\")".to_string(),
            })
            .unwrap();

        match event_rx.recv().await.expect("event") {
            Event::ExecutionStarted { language } => assert_eq!(language, "python"),
            other => panic!("expected started event, got {other:?}"),
        }

        let record = next_finished(&mut event_rx).await;
        assert_eq!(record.language, "python");
        assert_eq!(record.lines[0], "> Analyzing and running python code...");
        assert_eq!(record.lines.last().unwrap(), "");
        assert!(record.lines.contains(&"hi".to_string()));
    }
}
