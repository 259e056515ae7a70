//! Tests for the Octocrab issue gateway.

type FixtureResult<T> = Result<T, Box<dyn std::error::Error>>;

use std::time::Duration;

use http::StatusCode;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{OctocrabIssueGateway, decode_issue};
use crate::github::error::LookupError;
use crate::github::gateway::IssueGateway;
use crate::github::locator::{IssueCoordinate, IssueNumber, PersonalAccessToken, parse_api_base};

const ISSUE_PATH: &str = "/repos/acme/widgets/issues/42";

struct IssueGatewayFixture {
    runtime: Runtime,
    server: MockServer,
    coordinate: IssueCoordinate,
    gateway: OctocrabIssueGateway,
}

impl IssueGatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn mount(&self, response: ResponseTemplate) {
        self.block_on(
            Mock::given(method("GET"))
                .and(path(ISSUE_PATH))
                .and(header_exists("authorization"))
                .respond_with(response)
                .expect(1)
                .mount(&self.server),
        );
    }

    fn lookup(&self) -> Result<crate::github::IssueSummary, LookupError> {
        self.block_on(self.gateway.issue(&self.coordinate))
    }
}

#[fixture]
fn gateway_fixture() -> FixtureResult<IssueGatewayFixture> {
    let token = PersonalAccessToken::new("valid-token")?;
    let runtime = Runtime::new()?;
    let server = runtime.block_on(MockServer::start());
    let api_base = parse_api_base(&server.uri())?;
    let coordinate = IssueCoordinate::from_owner_repo("acme/widgets", IssueNumber::parse("42")?)?;
    let _guard = runtime.enter();
    let gateway = OctocrabIssueGateway::for_token(&token, &api_base, Duration::from_millis(500))?;
    Ok(IssueGatewayFixture {
        runtime,
        server,
        coordinate,
        gateway,
    })
}

#[rstest]
fn issue_returns_summary(gateway_fixture: FixtureResult<IssueGatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "number": 42,
        "title": "Fix crash",
        "html_url": "https://x/42",
        "state": "open",
        "user": { "login": "octocat" }
    })));

    let summary = fixture.lookup().expect("lookup should succeed");

    assert_eq!(summary.number, 42);
    assert_eq!(summary.title, "Fix crash");
    assert_eq!(summary.html_url, "https://x/42");
}

#[rstest]
fn issue_maps_not_found_to_transport(gateway_fixture: FixtureResult<IssueGatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "Not Found" })),
    );

    let error = fixture.lookup().expect_err("404 should fail");

    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert!(
        error.to_string().contains("Not Found"),
        "GitHub message should be carried: {error}"
    );
}

#[rstest]
fn issue_maps_unauthorized_to_authentication(
    gateway_fixture: FixtureResult<IssueGatewayFixture>,
) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "message": "Bad credentials" })),
    );

    let error = fixture.lookup().expect_err("401 should fail");

    assert!(
        matches!(error, LookupError::Authentication { .. }),
        "expected Authentication, got {error:?}"
    );
}

#[rstest]
fn issue_maps_incomplete_body_to_protocol(gateway_fixture: FixtureResult<IssueGatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "number": 42,
        "html_url": "https://x/42"
    })));

    let error = fixture.lookup().expect_err("missing title should fail");

    assert!(
        matches!(error, LookupError::Protocol { ref message } if message.contains("title")),
        "expected Protocol naming title, got {error:?}"
    );
}

#[rstest]
fn issue_times_out_as_transport(gateway_fixture: FixtureResult<IssueGatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        ResponseTemplate::new(200)
            .set_delay(Duration::from_secs(3))
            .set_body_json(serde_json::json!({
                "number": 42,
                "title": "Slow",
                "html_url": "https://x/42"
            })),
    );

    let error = fixture.lookup().expect_err("slow response should time out");

    assert!(
        matches!(error, LookupError::Transport { status: None, ref message } if message.contains("timed out")),
        "expected timeout transport error, got {error:?}"
    );
}

#[rstest]
#[case::missing_number(r#"{"title": "t", "html_url": "u"}"#, "number")]
#[case::number_as_string(r#"{"number": "42", "title": "t", "html_url": "u"}"#, "invalid type")]
#[case::null_url(r#"{"number": 42, "title": "t", "html_url": null}"#, "invalid type")]
#[case::not_json("<html>oops</html>", "expected value")]
fn decode_issue_rejects_malformed_bodies(#[case] body: &str, #[case] expected: &str) {
    let error = decode_issue(body).expect_err("decode should fail");
    assert!(
        matches!(error, LookupError::Protocol { ref message } if message.contains(expected)),
        "expected Protocol mentioning {expected}, got {error:?}"
    );
}
