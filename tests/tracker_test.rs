use commit_kit::domain::{IssueDraft, NewIssueRequest};
use commit_kit::tracker::{GithubTracker, IssueTracker, Submission};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ISSUES_PATH: &str = "/repos/acme/widgets/issues";

fn request() -> NewIssueRequest {
    IssueDraft {
        title: "Add login".to_string(),
        kind: "feat".to_string(),
        priority: "High".to_string(),
        description: "Users sign in".to_string(),
    }
    .to_request(&["task".to_string()])
}

/// The tracker uses a blocking client, which must not run on the async runtime.
async fn submit(server: &MockServer) -> Submission {
    let url = format!("{}{}", server.uri(), ISSUES_PATH);
    tokio::task::spawn_blocking(move || {
        let tracker = GithubTracker::new(url, "secret-token").unwrap();
        tracker.create_issue(&request()).unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_created_issue_returns_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("accept", "application/vnd.github+json"))
        .and(body_partial_json(json!({
            "title": "Add login",
            "labels": ["task"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 42,
            "state": "open"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submission = submit(&mock_server).await;
    assert!(matches!(submission, Submission::Created(issue) if issue.number == 42));
}

#[tokio::test]
async fn test_other_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message":"Validation Failed"}"#),
        )
        .mount(&mock_server)
        .await;

    let submission = submit(&mock_server).await;
    assert_eq!(
        submission,
        Submission::Rejected {
            status: 422,
            body: r#"{"message":"Validation Failed"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn test_ok_status_is_not_creation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 1 })))
        .mount(&mock_server)
        .await;

    let submission = submit(&mock_server).await;
    assert!(matches!(submission, Submission::Rejected { status: 200, .. }));
}
