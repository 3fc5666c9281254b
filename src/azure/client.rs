use crate::config::AzureDevOpsConfig;
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AzureError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Upstream request failed with status {status}: {body}")]
    UpstreamRequestFailed { status: u16, body: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid relation URL: {0}")]
    InvalidRelation(String),
}

impl AzureError {
    /// Short machine-readable kind used in tool error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            AzureError::HttpError(_) => "http_error",
            AzureError::SerdeJson(_) => "invalid_response",
            AzureError::UpstreamRequestFailed { .. } => "upstream_request_failed",
            AzureError::NotFound(_) => "not_found",
            AzureError::InvalidRelation(_) => "invalid_relation",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AzureError::UpstreamRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Where a request lands below the organization URL.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    Organization,
    Project(&'a str),
    Team(&'a str, &'a str),
}

pub const JSON: &str = "application/json";
pub const JSON_PATCH: &str = "application/json-patch+json";

/// Thin wrapper over `reqwest` holding the organization URL, the PAT and the
/// API version every request is pinned to.
pub struct AzureDevOpsClient {
    client: Client,
    org_url: String,
    pat: SecretString,
    api_version: String,
}

impl AzureDevOpsClient {
    pub fn new(config: &AzureDevOpsConfig) -> Self {
        Self {
            client: Client::new(),
            org_url: config.org_url.trim_end_matches('/').to_string(),
            pat: config.pat.clone(),
            api_version: config.api_version.clone(),
        }
    }

    pub fn org_url(&self) -> &str {
        &self.org_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Builds `{org}[/{project}[/{team}]]/_apis/{path}`. Project and team are
    /// percent-encoded; `path` is expected to be encoded by the caller.
    pub fn url(&self, scope: Scope<'_>, path: &str) -> String {
        match scope {
            Scope::Organization => format!("{}/_apis/{}", self.org_url, path),
            Scope::Project(project) => format!(
                "{}/{}/_apis/{}",
                self.org_url,
                urlencoding::encode(project),
                path
            ),
            Scope::Team(project, team) => format!(
                "{}/{}/{}/_apis/{}",
                self.org_url,
                urlencoding::encode(project),
                urlencoding::encode(team),
                path
            ),
        }
    }

    /// Appends the configured `api-version` to a path that may already carry a
    /// query string.
    pub fn versioned(&self, path: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{}{}api-version={}", path, separator, self.api_version)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&(impl Serialize + ?Sized)>,
        content_type: &str,
    ) -> Result<String, AzureError> {
        log::debug!("Request: {} {}", method, url);
        if let Some(b) = &body
            && let Ok(json) = serde_json::to_string_pretty(b)
        {
            log::debug!("Request body: {}", json);
        }

        let mut request = self
            .client
            .request(method, url)
            .basic_auth("", Some(self.pat.expose_secret()))
            .header("Content-Type", content_type);

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();

        log::debug!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::debug!("Error response: {}", error_text);
            return Err(AzureError::UpstreamRequestFailed {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;
        log::debug!("Response body: {}", response_text);
        Ok(response_text)
    }

    pub async fn request_with_content_type<T: DeserializeOwned>(
        &self,
        scope: Scope<'_>,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
        content_type: &str,
    ) -> Result<T, AzureError> {
        let url = self.url(scope, path);
        let text = self.send(method, &url, body, content_type).await?;
        let data = serde_json::from_str(&text)?;
        Ok(data)
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        scope: Scope<'_>,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, AzureError> {
        self.request_with_content_type(scope, method, path, body, JSON)
            .await
    }

    /// Make a request at the organization level (not project-scoped)
    pub async fn org_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, AzureError> {
        self.request(Scope::Organization, method, path, body).await
    }

    /// Make a request at the team level
    /// URL format: {org-url}/{project}/{team}/_apis/{path}
    pub async fn team_request<T: DeserializeOwned>(
        &self,
        project: &str,
        team: &str,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, AzureError> {
        self.request(Scope::Team(project, team), method, path, body)
            .await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
    ) -> Result<T, AzureError> {
        self.request(Scope::Project(project), Method::GET, path, None::<&String>)
            .await
    }

    /// GET returning the raw response body (for endpoints serving plain text)
    pub async fn get_text(&self, scope: Scope<'_>, path: &str) -> Result<String, AzureError> {
        let url = self.url(scope, path);
        self.send(Method::GET, &url, None::<&String>, JSON).await
    }

    /// Request whose response body is not needed; only the status is checked.
    pub async fn execute(
        &self,
        scope: Scope<'_>,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<(), AzureError> {
        let url = self.url(scope, path);
        self.send(method, &url, body, JSON).await.map(|_| ())
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, AzureError> {
        self.request(Scope::Project(project), Method::POST, path, Some(body))
            .await
    }

    pub async fn post_patch<T: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, AzureError> {
        self.request_with_content_type(
            Scope::Project(project),
            Method::POST,
            path,
            Some(body),
            JSON_PATCH,
        )
        .await
    }

    pub async fn patch_patch<T: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, AzureError> {
        self.request_with_content_type(
            Scope::Project(project),
            Method::PATCH,
            path,
            Some(body),
            JSON_PATCH,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(org_url: &str) -> AzureDevOpsClient {
        AzureDevOpsClient::new(&AzureDevOpsConfig {
            org_url: org_url.to_string(),
            pat: SecretString::from("pat".to_string()),
            api_version: "7.0".to_string(),
        })
    }

    #[test]
    fn url_encodes_project_and_team_segments() {
        let client = client("https://dev.azure.com/contoso/");
        assert_eq!(
            client.url(Scope::Organization, "projects"),
            "https://dev.azure.com/contoso/_apis/projects"
        );
        assert_eq!(
            client.url(Scope::Project("My Project"), "wit/wiql"),
            "https://dev.azure.com/contoso/My%20Project/_apis/wit/wiql"
        );
        assert_eq!(
            client.url(Scope::Team("Proj", "Team A"), "work/teamsettings/iterations"),
            "https://dev.azure.com/contoso/Proj/Team%20A/_apis/work/teamsettings/iterations"
        );
    }

    #[test]
    fn versioned_picks_the_right_separator() {
        let client = client("https://dev.azure.com/contoso");
        assert_eq!(client.versioned("projects"), "projects?api-version=7.0");
        assert_eq!(
            client.versioned("build/builds?definitions=4"),
            "build/builds?definitions=4&api-version=7.0"
        );
    }

    #[test]
    fn upstream_error_exposes_status_and_kind() {
        let err = AzureError::UpstreamRequestFailed {
            status: 404,
            body: "missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), "upstream_request_failed");
        assert!(err.to_string().contains("404"));
        assert_eq!(AzureError::NotFound("x".into()).status(), None);
    }
}
