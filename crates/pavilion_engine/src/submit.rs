use crate::fetch::{build_client, map_reqwest_error, FetchSettings};
use crate::{FailureKind, FetchError};

/// Contact form snapshot, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactSubmission {
    /// Encode into the field identifiers fixed by the external contact form.
    pub fn into_entries(self) -> Vec<(&'static str, String)> {
        vec![
            ("entry.1362376038", self.name),
            ("entry.876053468", self.email),
            ("entry.1723727918", self.organization),
            ("entry.1851143460", self.message),
        ]
    }
}

/// Careers application snapshot, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareersSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_type: String,
    pub linkedin: String,
}

impl CareersSubmission {
    /// Encode into the field identifiers fixed by the external careers form.
    pub fn into_entries(self) -> Vec<(&'static str, String)> {
        vec![
            ("entry.1414039973", self.name),
            ("entry.1384865087", self.email),
            ("entry.1881629800", self.phone),
            ("entry.327626644", self.job_type),
            ("entry.1411163976", self.linkedin),
        ]
    }
}

/// One opaque multipart POST to a forms endpoint.
///
/// Delivery policy: the forms backend is treated as write-only. Its response
/// status and body are never inspected; any request that survives transport
/// settles as delivered. Confirmation is best-effort only.
#[async_trait::async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(
        &self,
        endpoint: &str,
        entries: Vec<(&'static str, String)>,
    ) -> Result<(), FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: FetchSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl FormSubmitter for ReqwestSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        entries: Vec<(&'static str, String)>,
    ) -> Result<(), FetchError> {
        let parsed = reqwest::Url::parse(endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = build_client(&self.settings)?;

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in entries {
            form = form.text(name, value);
        }

        // Transport errors are the only failures; the response is opaque.
        client
            .post(parsed)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Ok(())
    }
}
