use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use site_logging::{site_debug, site_warn};

use crate::fetch::{FetchSettings, ReqwestFetcher, TextFetcher};
use crate::sheet::{self, SheetRecord};
use crate::submit::{CareersSubmission, ContactSubmission, FormSubmitter, ReqwestSubmitter};
use crate::{EngineEvent, FailureKind, FetchError, FormKind};

/// How long a delivered form shows its acknowledgment before it clears.
pub const ACK_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub sheet_url: String,
    pub contact_endpoint: String,
    pub careers_endpoint: String,
    pub fetch: FetchSettings,
    pub ack_delay: Duration,
}

impl EngineConfig {
    pub fn new(
        sheet_url: impl Into<String>,
        contact_endpoint: impl Into<String>,
        careers_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            contact_endpoint: contact_endpoint.into(),
            careers_endpoint: careers_endpoint.into(),
            fetch: FetchSettings::default(),
            ack_delay: ACK_DELAY,
        }
    }

    /// Checks the build-time endpoint URLs parse. Meant for startup, before
    /// any command is issued.
    pub fn validate(&self) -> Result<(), FetchError> {
        for raw in [
            &self.sheet_url,
            &self.contact_endpoint,
            &self.careers_endpoint,
        ] {
            url::Url::parse(raw).map_err(|err| {
                FetchError::new(FailureKind::InvalidUrl, format!("{raw}: {err}"))
            })?;
        }
        Ok(())
    }
}

enum EngineCommand {
    LoadProjects,
    SubmitContact(ContactSubmission),
    SubmitCareers(CareersSubmission),
    StartAckTimer { form: FormKind },
}

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        let submitter = Arc::new(ReqwestSubmitter::new(config.fetch.clone()));
        let config = Arc::new(config);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let submitter = submitter.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), submitter.as_ref(), &config, command, event_tx)
                        .await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn load_projects(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadProjects);
    }

    pub fn submit_contact(&self, submission: ContactSubmission) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitContact(submission));
    }

    pub fn submit_careers(&self, submission: CareersSubmission) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitCareers(submission));
    }

    pub fn start_ack_timer(&self, form: FormKind) {
        let _ = self.cmd_tx.send(EngineCommand::StartAckTimer { form });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn TextFetcher,
    submitter: &dyn FormSubmitter,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadProjects => {
            let result = load_projects(fetcher, &config.sheet_url).await;
            if let Err(err) = &result {
                site_warn!("project listing load failed: {} ({})", err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::ProjectsLoaded { result });
        }
        EngineCommand::SubmitContact(submission) => {
            let result = submitter
                .submit(&config.contact_endpoint, submission.into_entries())
                .await;
            if let Err(err) = &result {
                site_warn!("contact submission failed: {} ({})", err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::SubmissionSettled {
                form: FormKind::Contact,
                result,
            });
        }
        EngineCommand::SubmitCareers(submission) => {
            let result = submitter
                .submit(&config.careers_endpoint, submission.into_entries())
                .await;
            if let Err(err) = &result {
                site_warn!("careers submission failed: {} ({})", err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::SubmissionSettled {
                form: FormKind::Careers,
                result,
            });
        }
        EngineCommand::StartAckTimer { form } => {
            tokio::time::sleep(config.ack_delay).await;
            let _ = event_tx.send(EngineEvent::AckElapsed { form });
        }
    }
}

/// Fetch the export and parse it into records.
///
/// Fewer than two lines cannot hold a header and a data row and is reported
/// as `EmptySheet`; a header with only blank lines after it is a valid,
/// empty listing.
pub async fn load_projects(
    fetcher: &dyn TextFetcher,
    url: &str,
) -> Result<Vec<SheetRecord>, FetchError> {
    let text = fetcher.fetch_text(url).await?;
    if text.split('\n').count() < 2 {
        return Err(FetchError::new(FailureKind::EmptySheet, "export has no data rows"));
    }
    let records = sheet::parse_records(&text);
    site_debug!("parsed {} project records from export", records.len());
    Ok(records)
}
