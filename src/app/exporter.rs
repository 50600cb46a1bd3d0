use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};

/// A queued "download": copy a record's managed image to a destination the
/// user picked.
pub struct ExportRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
}

pub struct ExportStatus {
    pub destination: PathBuf,
    pub result: Result<()>,
}

/// Background export worker, so large copies never stall the UI thread.
pub struct Exporter {
    export_tx: Sender<ExportRequest>,
    status_rx: Receiver<ExportStatus>,
    pub pending: Vec<PathBuf>,
}

impl Exporter {
    pub fn new() -> Self {
        let (export_tx, export_rx) = mpsc::channel::<ExportRequest>();
        let (status_tx, status_rx) = mpsc::channel();
        Self::spawn_worker(export_rx, status_tx);
        Self {
            export_tx,
            status_rx,
            pending: Vec::new(),
        }
    }

    fn spawn_worker(rx: Receiver<ExportRequest>, tx: Sender<ExportStatus>) {
        thread::spawn(move || {
            while let Ok(req) = rx.recv() {
                let result = std::fs::copy(&req.source, &req.destination)
                    .map(|_| ())
                    .with_context(|| {
                        format!(
                            "Unable to copy {} to {}",
                            req.source.display(),
                            req.destination.display()
                        )
                    });
                let _ = tx.send(ExportStatus {
                    destination: req.destination,
                    result,
                });
            }
        });
    }

    pub fn queue_export(&mut self, request: ExportRequest) {
        self.pending.push(request.destination.clone());
        let _ = self.export_tx.send(request);
    }

    pub fn check_completions(&mut self) -> Vec<ExportStatus> {
        let mut completed = Vec::new();
        while let Ok(status) = self.status_rx.try_recv() {
            if let Some(idx) = self
                .pending
                .iter()
                .position(|p| *p == status.destination)
            {
                self.pending.remove(idx);
            }
            completed.push(status);
        }
        completed
    }
}
