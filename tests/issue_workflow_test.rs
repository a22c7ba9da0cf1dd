use commit_kit::boundary::BoundaryWarning;
use commit_kit::cli::orchestration::{run_issue_workflow, IssueWorkflowResult};
use commit_kit::config::IssuesConfig;
use commit_kit::git::MockRepository;
use commit_kit::tracker::MockTracker;
use commit_kit::ui::Prompter;
use commit_kit::CommitKitError;
use std::io::Cursor;

const ANSWERS: &str = "Add Login Page!\nfeat\nHigh\nUsers need to sign in\n";

fn answers(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_created_issue_gets_branch() {
    let tracker = MockTracker::accepting(42);
    let repo = MockRepository::new("/tmp/.git");

    let result = run_issue_workflow(
        &IssuesConfig::default(),
        &tracker,
        &repo,
        &mut answers(ANSWERS),
    )
    .unwrap();

    assert_eq!(
        result,
        IssueWorkflowResult::Created {
            number: 42,
            title: "Add Login Page!".to_string(),
            branch: "feat/add-login-page-42".to_string(),
            warnings: vec![],
        }
    );
    assert_eq!(
        repo.actions(),
        vec![
            "checkout development".to_string(),
            "pull origin development".to_string(),
            "branch feat/add-login-page-42".to_string(),
        ]
    );

    let requests = tracker.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, "Add Login Page!");
    assert_eq!(requests[0].labels, vec!["task".to_string()]);
    assert!(requests[0].body.contains("### Priority\nHigh"));
}

#[test]
fn test_rejected_issue_creates_no_branch() {
    let tracker = MockTracker::rejecting(401, r#"{"message":"Bad credentials"}"#);
    let repo = MockRepository::new("/tmp/.git");

    let result = run_issue_workflow(
        &IssuesConfig::default(),
        &tracker,
        &repo,
        &mut answers(ANSWERS),
    )
    .unwrap();

    assert_eq!(
        result,
        IssueWorkflowResult::Rejected {
            status: 401,
            body: r#"{"message":"Bad credentials"}"#.to_string(),
        }
    );
    assert!(repo.actions().is_empty());
}

#[test]
fn test_missing_base_branch_still_branches() {
    let tracker = MockTracker::accepting(7);
    let repo = MockRepository::new("/tmp/.git").failing("checkout");

    let result = run_issue_workflow(
        &IssuesConfig::default(),
        &tracker,
        &repo,
        &mut answers(ANSWERS),
    )
    .unwrap();

    match result {
        IssueWorkflowResult::Created { warnings, .. } => {
            assert!(matches!(
                warnings.as_slice(),
                [BoundaryWarning::CheckoutFailed { branch, .. }] if branch == "development"
            ));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(repo.actions(), vec!["branch feat/add-login-page-7".to_string()]);
}

#[test]
fn test_pull_failure_is_a_warning() {
    let tracker = MockTracker::accepting(8);
    let repo = MockRepository::new("/tmp/.git").failing("pull");
    let config = IssuesConfig {
        base_branch: "main".to_string(),
        remote: "upstream".to_string(),
        ..IssuesConfig::default()
    };

    let result = run_issue_workflow(&config, &tracker, &repo, &mut answers(ANSWERS)).unwrap();

    match result {
        IssueWorkflowResult::Created { warnings, branch, .. } => {
            assert_eq!(branch, "feat/add-login-page-8");
            assert!(matches!(
                warnings.as_slice(),
                [BoundaryWarning::PullFailed { remote, .. }] if remote == "upstream"
            ));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_aborted_input_submits_nothing() {
    let tracker = MockTracker::accepting(1);
    let repo = MockRepository::new("/tmp/.git");

    let err = run_issue_workflow(
        &IssuesConfig::default(),
        &tracker,
        &repo,
        &mut answers("Add login\nfeat\n"),
    )
    .unwrap_err();

    assert!(err.is_aborted());
    assert!(tracker.requests().is_empty());
}

#[test]
fn test_blank_type_submits_nothing() {
    let tracker = MockTracker::accepting(1);
    let repo = MockRepository::new("/tmp/.git");

    let err = run_issue_workflow(
        &IssuesConfig::default(),
        &tracker,
        &repo,
        &mut answers("Add login\n \nHigh\nUsers sign in\n"),
    )
    .unwrap_err();

    assert!(matches!(err, CommitKitError::Branch(_)));
    assert!(tracker.requests().is_empty());
    assert!(repo.actions().is_empty());
}
