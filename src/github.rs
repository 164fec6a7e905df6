/// Pull request comment service
///
/// This module handles:
/// - The `CommentService` seam the runner talks to
/// - Finding, creating, updating and deleting issue comments over the GitHub REST API
/// - A dry-run implementation that only prints what it would do
///
/// A report comment is identified by its body starting with the report title.
use crate::error::ReporterError;
use crate::ui;
use log::{debug, info};
use serde::Deserialize;

const USER_AGENT: &str = concat!("mocha-pr-reporter/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Comments listed per request; a shorter page is the last one
const PER_PAGE: usize = 100;

/// Where the report comment lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTarget {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

impl std::fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.issue_number)
    }
}

/// Outbound comment operations
pub trait CommentService {
    /// Delete every comment whose body starts with `title_prefix`. No-op when none match.
    fn retract(&self, target: &CommentTarget, title_prefix: &str) -> Result<(), ReporterError>;

    /// Overwrite the first comment whose body starts with `title_prefix`, or create one.
    fn publish_or_replace(&self, target: &CommentTarget, title_prefix: &str, body: &str) -> Result<(), ReporterError>;
}

/// A comment as returned by the issues API (only the fields we use)
#[derive(Debug, Clone, Deserialize)]
struct IssueComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

impl IssueComment {
    fn starts_with(&self, title_prefix: &str) -> bool {
        self.body.as_deref().is_some_and(|body| body.starts_with(title_prefix))
    }
}

/// Ids of every report comment, in listing order
fn comments_to_retract(comments: &[IssueComment], title_prefix: &str) -> Vec<u64> {
    comments.iter().filter(|c| c.starts_with(title_prefix)).map(|c| c.id).collect()
}

/// Id of the report comment to overwrite; the first match wins
fn comment_to_replace(comments: &[IssueComment], title_prefix: &str) -> Option<u64> {
    comments.iter().find(|c| c.starts_with(title_prefix)).map(|c| c.id)
}

/// GitHub REST client for issue comments
pub struct GithubComments {
    agent: ureq::Agent,
    api_url: String,
    token: String,
}

impl GithubComments {
    pub fn new(api_url: &str, token: &str) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        GithubComments { agent, api_url: api_url.trim_end_matches('/').to_string(), token: token.to_string() }
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("X-GitHub-Api-Version", "2022-11-28")
    }

    fn issue_comments_url(&self, target: &CommentTarget) -> String {
        format!("{}/repos/{}/{}/issues/{}/comments", self.api_url, target.owner, target.repo, target.issue_number)
    }

    fn comment_url(&self, target: &CommentTarget, id: u64) -> String {
        format!("{}/repos/{}/{}/issues/comments/{}", self.api_url, target.owner, target.repo, id)
    }

    /// List all comments on the issue, following pages until a short one
    fn list_comments(&self, target: &CommentTarget) -> Result<Vec<IssueComment>, ReporterError> {
        let base = self.issue_comments_url(target);
        let mut all = Vec::new();

        for page in 1.. {
            let url = format!("{}?per_page={}&page={}", base, PER_PAGE, page);
            debug!("fetching comment page {} for {}", page, target);

            let comments: Vec<IssueComment> = self
                .request("GET", &url)
                .call()
                .map_err(|e| call_error("GET", &url, e))?
                .into_json()
                .map_err(|e| ReporterError::CollaboratorCall(format!("GET {}: invalid response: {}", url, e)))?;

            let page_size = comments.len();
            all.extend(comments);
            if page_size < PER_PAGE {
                break;
            }
        }

        debug!("found {} comments on {}", all.len(), target);
        Ok(all)
    }
}

impl CommentService for GithubComments {
    fn retract(&self, target: &CommentTarget, title_prefix: &str) -> Result<(), ReporterError> {
        let matching = comments_to_retract(&self.list_comments(target)?, title_prefix);

        if matching.is_empty() {
            info!("no report comment on {} to remove", target);
            return Ok(());
        }

        for id in matching {
            let url = self.comment_url(target, id);
            self.request("DELETE", &url).call().map_err(|e| call_error("DELETE", &url, e))?;
            info!("removed report comment {} on {}", id, target);
        }
        Ok(())
    }

    fn publish_or_replace(&self, target: &CommentTarget, title_prefix: &str, body: &str) -> Result<(), ReporterError> {
        let existing = comment_to_replace(&self.list_comments(target)?, title_prefix);
        let payload = serde_json::json!({ "body": body });

        match existing {
            Some(id) => {
                let url = self.comment_url(target, id);
                self.request("PATCH", &url).send_json(payload).map_err(|e| call_error("PATCH", &url, e))?;
                info!("updated report comment {} on {}", id, target);
            }
            None => {
                let url = self.issue_comments_url(target);
                self.request("POST", &url).send_json(payload).map_err(|e| call_error("POST", &url, e))?;
                info!("created report comment on {}", target);
            }
        }
        Ok(())
    }
}

fn call_error(method: &str, url: &str, e: ureq::Error) -> ReporterError {
    let detail = match e {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            format!("HTTP {}: {}", code, body.trim())
        }
        // The transport's Display repeats the URL; keep only kind and message
        ureq::Error::Transport(transport) => match transport.message() {
            Some(message) => format!("{}: {}", transport.kind(), message),
            None => transport.kind().to_string(),
        },
    };
    ReporterError::CollaboratorCall(format!("{} {}: {}", method, url, detail))
}

/// Prints the decided action instead of calling GitHub
pub struct DryRunComments;

impl CommentService for DryRunComments {
    fn retract(&self, target: &CommentTarget, title_prefix: &str) -> Result<(), ReporterError> {
        ui::status(&format!("dry run: would remove comments starting with {:?} on {}", title_prefix, target));
        Ok(())
    }

    fn publish_or_replace(&self, target: &CommentTarget, title_prefix: &str, body: &str) -> Result<(), ReporterError> {
        ui::status(&format!("dry run: would publish comment starting with {:?} on {}", title_prefix, target));
        println!("{}", body);
        Ok(())
    }
}
