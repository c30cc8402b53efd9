use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pavilion_core::{Effect, FormKind, Msg, ProjectRecord};
use pavilion_engine::{
    CareersSubmission, ContactSubmission, EngineEvent, EngineHandle, SheetRecord,
};
use site_logging::{site_error, site_info};

use crate::config;

/// One generic user-facing message for every listing failure; the detail is
/// in the log, the user gets the reload affordance.
const LISTING_ERROR: &str = "Could not load projects. Try `reload`.";

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let config = config::engine_config();
        if let Err(err) = config.validate() {
            site_error!("endpoint configuration invalid: {} ({})", err.kind, err.message);
        }

        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadProjects => {
                    site_info!("LoadProjects");
                    self.engine.load_projects();
                }
                Effect::SubmitContact { fields } => {
                    site_info!("SubmitContact from={}", fields.email);
                    self.engine.submit_contact(ContactSubmission {
                        name: fields.name,
                        email: fields.email,
                        organization: fields.organization,
                        message: fields.message,
                    });
                }
                Effect::SubmitCareers { fields } => {
                    site_info!("SubmitCareers from={}", fields.email);
                    self.engine.submit_careers(CareersSubmission {
                        name: fields.name,
                        email: fields.email,
                        phone: fields.phone,
                        job_type: fields.job_type.label().to_string(),
                        linkedin: fields.linkedin,
                    });
                }
                Effect::StartAckTimer { form } => {
                    self.engine.start_ack_timer(map_form_to_engine(form));
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::ProjectsLoaded { result } => Msg::ProjectsLoaded {
                        result: result
                            .map(|records| records.into_iter().map(map_record).collect())
                            .map_err(|_| LISTING_ERROR.to_string()),
                    },
                    EngineEvent::SubmissionSettled { form, result } => Msg::SubmissionSettled {
                        form: map_form_to_core(form),
                        delivered: result.is_ok(),
                    },
                    EngineEvent::AckElapsed { form } => Msg::AckElapsed {
                        form: map_form_to_core(form),
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_record(record: SheetRecord) -> ProjectRecord {
    ProjectRecord::new(record.id, record.fields)
}

fn map_form_to_engine(form: FormKind) -> pavilion_engine::FormKind {
    match form {
        FormKind::Contact => pavilion_engine::FormKind::Contact,
        FormKind::Careers => pavilion_engine::FormKind::Careers,
    }
}

fn map_form_to_core(form: pavilion_engine::FormKind) -> FormKind {
    match form {
        pavilion_engine::FormKind::Contact => FormKind::Contact,
        pavilion_engine::FormKind::Careers => FormKind::Careers,
    }
}
