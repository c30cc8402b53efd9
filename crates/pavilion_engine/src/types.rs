use std::fmt;

use crate::sheet::SheetRecord;

pub type RecordId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Careers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The spreadsheet export was fetched and parsed (or failed trying).
    ProjectsLoaded {
        result: Result<Vec<SheetRecord>, FetchError>,
    },
    /// A form submission settled. Ok means the request survived transport;
    /// the backend's response is never inspected.
    SubmissionSettled {
        form: FormKind,
        result: Result<(), FetchError>,
    },
    /// The acknowledgment delay for a delivered form ran out.
    AckElapsed { form: FormKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Encoding { encoding: String },
    EmptySheet,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Encoding { encoding } => {
                write!(f, "undecodable response ({encoding})")
            }
            FailureKind::EmptySheet => write!(f, "export has no data rows"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
