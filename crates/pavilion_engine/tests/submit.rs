use pavilion_engine::{
    CareersSubmission, ContactSubmission, FailureKind, FetchSettings, FormSubmitter,
    ReqwestSubmitter,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contact_fixture() -> ContactSubmission {
    ContactSubmission {
        name: "Asha".to_string(),
        email: "asha@example.org".to_string(),
        organization: "River Trust".to_string(),
        message: "We need an impact study.".to_string(),
    }
}

#[test]
fn contact_entries_use_the_external_identifiers() {
    let entries = contact_fixture().into_entries();

    assert_eq!(
        entries,
        vec![
            ("entry.1362376038", "Asha".to_string()),
            ("entry.876053468", "asha@example.org".to_string()),
            ("entry.1723727918", "River Trust".to_string()),
            ("entry.1851143460", "We need an impact study.".to_string()),
        ]
    );
}

#[test]
fn careers_entries_use_the_external_identifiers() {
    let entries = CareersSubmission {
        name: "Ravi".to_string(),
        email: "ravi@example.org".to_string(),
        phone: "+91 99999 99999".to_string(),
        job_type: "Full-time".to_string(),
        linkedin: String::new(),
    }
    .into_entries();

    assert_eq!(
        entries,
        vec![
            ("entry.1414039973", "Ravi".to_string()),
            ("entry.1384865087", "ravi@example.org".to_string()),
            ("entry.1881629800", "+91 99999 99999".to_string()),
            ("entry.327626644", "Full-time".to_string()),
            ("entry.1411163976", String::new()),
        ]
    );
}

#[tokio::test]
async fn submission_posts_multipart_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/formResponse"))
        .and(body_string_contains("entry.1362376038"))
        .and(body_string_contains("Asha"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(FetchSettings::default());
    let endpoint = format!("{}/formResponse", server.uri());

    submitter
        .submit(&endpoint, contact_fixture().into_entries())
        .await
        .expect("submission delivered");
}

#[tokio::test]
async fn delivery_is_assumed_whatever_the_status_says() {
    // Opaque-delivery policy: the backend's response is never inspected, so
    // even a rejection settles as delivered.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/formResponse"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(FetchSettings::default());
    let endpoint = format!("{}/formResponse", server.uri());

    submitter
        .submit(&endpoint, contact_fixture().into_entries())
        .await
        .expect("status is not a transport failure");
}

#[tokio::test]
async fn transport_failure_is_reported() {
    // Grab a port, then free it again so the connection is refused.
    let endpoint = {
        let server = MockServer::start().await;
        format!("{}/formResponse", server.uri())
    };

    let submitter = ReqwestSubmitter::new(FetchSettings::default());
    let err = submitter
        .submit(&endpoint, contact_fixture().into_entries())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
