//! Pavilion engine: IO pipeline and effect execution.
mod decode;
mod engine;
mod fetch;
mod sheet;
mod submit;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{load_projects, EngineConfig, EngineHandle, ACK_DELAY};
pub use fetch::{FetchSettings, ReqwestFetcher, TextFetcher};
pub use sheet::{parse_records, SheetRecord};
pub use submit::{CareersSubmission, ContactSubmission, FormSubmitter, ReqwestSubmitter};
pub use types::{EngineEvent, FailureKind, FetchError, FormKind, RecordId};
