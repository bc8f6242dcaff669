//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{GhCli, PlatformService};
use crate::types::{
    AutoMergeBackend, CommitMessage, MergeMethod, PlatformConfig, PullRequestDetails,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

// REST payloads. Only the fields we read are declared, so responses from
// GitHub Enterprise versions with fewer fields still deserialize.

#[derive(Deserialize)]
struct RestPullRequest {
    number: u64,
    #[serde(default)]
    title: String,
    body: Option<String>,
    #[serde(default)]
    labels: Vec<RestLabel>,
    html_url: Option<String>,
    node_id: Option<String>,
}

#[derive(Deserialize)]
struct RestLabel {
    name: String,
}

impl From<RestPullRequest> for PullRequestDetails {
    fn from(pr: RestPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            body: pr.body,
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
            html_url: pr.html_url.unwrap_or_default(),
            node_id: pr.node_id,
        }
    }
}

#[derive(Serialize)]
struct MergeRequestBody<'a> {
    commit_title: &'a str,
    commit_message: &'a str,
    merge_method: String,
}

#[derive(Deserialize)]
struct MergeResponse {
    merged: bool,
    sha: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct CommentRequestBody<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct CreatedComment {
    id: u64,
}

// GraphQL response types for the enablePullRequestAutoMerge mutation

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnableAutoMergeData {
    enable_pull_request_auto_merge: Option<EnableAutoMergePayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnableAutoMergePayload {
    pull_request: GraphQlPullRequest,
}

#[derive(Deserialize)]
struct GraphQlPullRequest {
    number: u64,
}

const ENABLE_AUTO_MERGE_MUTATION: &str = r"
    mutation EnableAutoMerge(
        $pullRequestId: ID!,
        $mergeMethod: PullRequestMergeMethod!,
        $commitHeadline: String,
        $commitBody: String
    ) {
        enablePullRequestAutoMerge(input: {
            pullRequestId: $pullRequestId,
            mergeMethod: $mergeMethod,
            commitHeadline: $commitHeadline,
            commitBody: $commitBody
        }) {
            pullRequest {
                number
            }
        }
    }
";

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    /// How `enable_auto_merge` reaches GitHub
    auto_merge: AutoMergeBackend,
    /// CLI runner for the `gh` auto-merge backend
    gh: GhCli,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: PlatformConfig, auto_merge: AutoMergeBackend) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref url) = config.api_url {
            builder = builder
                .base_uri(url.as_str().trim_end_matches('/'))
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        } else if let Some(ref h) = config.host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let gh = GhCli::new(token, config.host.clone());

        Ok(Self {
            client,
            config,
            auto_merge,
            gh,
        })
    }

    fn pull_route(&self, pr_number: u64) -> String {
        format!(
            "/repos/{}/{}/pulls/{pr_number}",
            self.config.owner, self.config.repo
        )
    }

    /// Arm auto-merge through the GraphQL API
    async fn enable_auto_merge_graphql(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        // Fetch PR to get node_id for GraphQL mutation
        let details = self.get_pr_details(pr_number).await?;
        let node_id = details.node_id.ok_or_else(|| {
            Error::GitHubApi("PR missing node_id for GraphQL mutation".to_string())
        })?;

        let response: GraphQlResponse<EnableAutoMergeData> = self
            .client
            .graphql(&serde_json::json!({
                "query": ENABLE_AUTO_MERGE_MUTATION,
                "variables": {
                    "pullRequestId": node_id,
                    "mergeMethod": method.graphql_name(),
                    "commitHeadline": message.subject,
                    "commitBody": message.body,
                }
            }))
            .await
            .map_err(|e| Error::GitHubApi(format!("GraphQL mutation failed: {e}")))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GitHubApi(messages.join(", ")));
        }

        let payload = response
            .data
            .and_then(|d| d.enable_pull_request_auto_merge)
            .ok_or_else(|| Error::GitHubApi("No data in GraphQL response".to_string()))?;

        debug!(
            pr_number = payload.pull_request.number,
            "auto-merge armed via GraphQL"
        );
        Ok(())
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(pr_number, "getting PR details");

        let pr: RestPullRequest = self
            .client
            .get(self.pull_route(pr_number), None::<&()>)
            .await?;

        let details = PullRequestDetails::from(pr);
        debug!(pr_number, labels = details.labels.len(), "got PR details");
        Ok(details)
    }

    async fn merge_pr(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        debug!(pr_number, %method, "merging PR");

        let body = MergeRequestBody {
            commit_title: &message.subject,
            commit_message: &message.body,
            merge_method: method.to_string(),
        };

        let result: MergeResponse = self
            .client
            .put(format!("{}/merge", self.pull_route(pr_number)), Some(&body))
            .await?;

        if !result.merged {
            return Err(Error::GitHubApi(
                result
                    .message
                    .unwrap_or_else(|| "Pull request was not merged".to_string()),
            ));
        }

        debug!(pr_number, sha = ?result.sha, "merge complete");
        Ok(())
    }

    async fn enable_auto_merge(
        &self,
        pr_number: u64,
        message: &CommitMessage,
        method: MergeMethod,
    ) -> Result<()> {
        debug!(pr_number, %method, backend = ?self.auto_merge, "enabling auto-merge");
        match self.auto_merge {
            AutoMergeBackend::GhCli => {
                self.gh
                    .enable_auto_merge(&self.config.full_name(), pr_number, message, method)
                    .await
            }
            AutoMergeBackend::GraphQl => {
                self.enable_auto_merge_graphql(pr_number, message, method)
                    .await
            }
        }
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!(pr_number, "creating PR comment");
        let route = format!(
            "/repos/{}/{}/issues/{pr_number}/comments",
            self.config.owner, self.config.repo
        );
        let comment: CreatedComment = self
            .client
            .post(route, Some(&CommentRequestBody { body }))
            .await?;
        debug!(pr_number, comment_id = comment.id, "created PR comment");
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
