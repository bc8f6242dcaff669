//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use slash_merge::error::{Error, Result};
use slash_merge::platform::PlatformService;
use slash_merge::types::{CommitMessage, MergeMethod, PlatformConfig, PullRequestDetails};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Call record for `merge_pr` and `enable_auto_merge`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePrCall {
    pub pr_number: u64,
    pub subject: String,
    pub body: String,
    pub method: MergeMethod,
}

/// Call record for `create_pr_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable PR details per number
/// - Call tracking for verification
/// - Error injection for failure path testing
/// - Optional delay on `merge_pr` for deadline tests
pub struct MockPlatformService {
    config: PlatformConfig,
    pr_details_responses: Mutex<HashMap<u64, PullRequestDetails>>,
    // Call tracking
    get_pr_details_calls: Mutex<Vec<u64>>,
    merge_pr_calls: Mutex<Vec<MergePrCall>>,
    auto_merge_calls: Mutex<Vec<MergePrCall>>,
    create_comment_calls: Mutex<Vec<CreateCommentCall>>,
    // Error injection
    error_on_get_pr_details: Mutex<Option<String>>,
    error_on_merge_pr: Mutex<Option<String>>,
    error_on_auto_merge: Mutex<Option<String>>,
    error_on_create_comment: Mutex<Option<String>>,
    merge_delay: Mutex<Option<Duration>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            pr_details_responses: Mutex::new(HashMap::new()),
            get_pr_details_calls: Mutex::new(Vec::new()),
            merge_pr_calls: Mutex::new(Vec::new()),
            auto_merge_calls: Mutex::new(Vec::new()),
            create_comment_calls: Mutex::new(Vec::new()),
            error_on_get_pr_details: Mutex::new(None),
            error_on_merge_pr: Mutex::new(None),
            error_on_auto_merge: Mutex::new(None),
            error_on_create_comment: Mutex::new(None),
            merge_delay: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `get_pr_details` return an error
    pub fn fail_get_pr_details(&self, msg: &str) {
        *self.error_on_get_pr_details.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge_pr(&self, msg: &str) {
        *self.error_on_merge_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `enable_auto_merge` return an error
    pub fn fail_auto_merge(&self, msg: &str) {
        *self.error_on_auto_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr_comment` return an error
    pub fn fail_create_comment(&self, msg: &str) {
        *self.error_on_create_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` sleep before answering
    pub fn delay_merge_pr(&self, delay: Duration) {
        *self.merge_delay.lock().unwrap() = Some(delay);
    }

    /// Set the response for `get_pr_details` for a specific PR
    pub fn set_pr_details_response(&self, details: PullRequestDetails) {
        self.pr_details_responses
            .lock()
            .unwrap()
            .insert(details.number, details);
    }

    /// Helper to set up a PR with the given title, body and labels
    pub fn setup_pr(&self, pr_number: u64, title: &str, body: Option<&str>, labels: &[&str]) {
        self.set_pr_details_response(make_pr(pr_number, title, body, labels));
    }

    // === Call inspection ===

    pub fn get_pr_details_calls(&self) -> Vec<u64> {
        self.get_pr_details_calls.lock().unwrap().clone()
    }

    pub fn get_merge_pr_calls(&self) -> Vec<MergePrCall> {
        self.merge_pr_calls.lock().unwrap().clone()
    }

    pub fn get_auto_merge_calls(&self) -> Vec<MergePrCall> {
        self.auto_merge_calls.lock().unwrap().clone()
    }

    pub fn get_create_comment_calls(&self) -> Vec<CreateCommentCall> {
        self.create_comment_calls.lock().unwrap().clone()
    }

    /// Assert that exactly one comment with this body was posted
    pub fn assert_single_comment(&self, pr_number: u64, body: &str) {
        let calls = self.get_create_comment_calls();
        assert_eq!(
            calls,
            vec![CreateCommentCall {
                pr_number,
                body: body.to_string(),
            }],
            "Expected a single comment on PR #{pr_number}"
        );
    }

    /// Assert that neither merge path was taken
    pub fn assert_no_merge(&self) {
        let merges = self.get_merge_pr_calls();
        let autos = self.get_auto_merge_calls();
        assert!(
            merges.is_empty() && autos.is_empty(),
            "Expected no merge but got merge_pr: {merges:?}, enable_auto_merge: {autos:?}"
        );
    }
}

/// Build PR details for tests
pub fn make_pr(
    pr_number: u64,
    title: &str,
    body: Option<&str>,
    labels: &[&str],
) -> PullRequestDetails {
    PullRequestDetails {
        number: pr_number,
        title: title.to_string(),
        body: body.map(ToString::to_string),
        labels: labels.iter().map(ToString::to_string).collect(),
        html_url: format!("https://github.com/test/repo/pull/{pr_number}"),
        node_id: Some(format!("PR_node_{pr_number}")),
    }
}

fn record(calls: &Mutex<Vec<MergePrCall>>, pr_number: u64, message: &CommitMessage, method: MergeMethod) {
    calls.lock().unwrap().push(MergePrCall {
        pr_number,
        subject: message.subject.clone(),
        body: message.body.clone(),
        method,
    });
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        self.get_pr_details_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_get_pr_details.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        self.pr_details_responses
            .lock()
            .unwrap()
            .get(&pr_number)
            .cloned()
            .ok_or_else(|| Error::GitHubApi("Not Found".to_string()))
    }

    async fn merge_pr(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        record(&self.merge_pr_calls, pr_number, message, method);

        let delay = *self.merge_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(msg) = self.error_on_merge_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    async fn enable_auto_merge(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        record(&self.auto_merge_calls, pr_number, message, method);

        if let Some(msg) = self.error_on_auto_merge.lock().unwrap().as_ref() {
            return Err(Error::ExternalTool {
                tool: "gh".to_string(),
                message: msg.clone(),
            });
        }
        Ok(())
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.create_comment_calls
            .lock()
            .unwrap()
            .push(CreateCommentCall {
                pr_number,
                body: body.to_string(),
            });

        if let Some(msg) = self.error_on_create_comment.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
