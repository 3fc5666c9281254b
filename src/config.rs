//! Startup configuration.
//!
//! Values come from command-line flags, falling back to environment variables
//! (a `.env` file is loaded first), then to an optional TOML file. The result is
//! an explicit [`Config`] that is handed to every component constructor.

use clap::{Parser, ValueEnum};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_VERSION: &str = "7.0";
pub const DEFAULT_PORT: u16 = 80;
const CONFIG_DIR_NAME: &str = "azure-devops-mcp";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Streamable HTTP on 0.0.0.0:{port}
    Http,
    /// MCP over stdin/stdout
    Stdio,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Azure DevOps base URL (e.g. https://dev.azure.com/)
    #[arg(long, env = "AZURE_DEVOPS_URL")]
    pub url: Option<String>,

    /// Organization name appended to the base URL
    #[arg(long, env = "MCP_ORG")]
    pub org: Option<String>,

    /// Personal access token
    #[arg(long, env = "AZURE_DEVOPS_PAT", hide_env_values = true)]
    pub pat: Option<String>,

    /// Port for the HTTP transport
    #[arg(long, env = "MCP_PORT")]
    pub port: Option<u16>,

    /// REST api-version sent with every request
    #[arg(long, env = "AZURE_DEVOPS_API_VERSION")]
    pub api_version: Option<String>,

    /// Service name reported in the startup logs
    #[arg(long, env = "SERVICE_NAME")]
    pub service_name: Option<String>,

    /// Transport to serve MCP over
    #[arg(long, env = "MCP_TRANSPORT", value_enum)]
    pub transport: Option<Transport>,

    /// Path to a TOML config file
    #[arg(long, env = "MCP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Values accepted from the TOML config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub org: Option<String>,
    pub pat: Option<String>,
    pub port: Option<u16>,
    pub api_version: Option<String>,
    pub service_name: Option<String>,
    pub transport: Option<Transport>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `{config_dir}/azure-devops-mcp/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[derive(Debug, Clone)]
pub struct AzureDevOpsConfig {
    /// Organization URL, e.g. `https://dev.azure.com/contoso`
    pub org_url: String,
    pub pat: SecretString,
    pub api_version: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub service_name: String,
    pub transport: Transport,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub azure: AzureDevOpsConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Loads `.env`, parses the command line and merges the config file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let args = Args::parse();

        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => match FileConfig::default_path() {
                Some(path) if path.is_file() => {
                    log::debug!("Loading config file {}", path.display());
                    FileConfig::load(&path)?
                }
                _ => FileConfig::default(),
            },
        };

        Self::resolve(args, file)
    }

    /// Merges flag/environment values over file values and validates the
    /// result. A missing URL or PAT is fatal.
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self, ConfigError> {
        let url =
            non_empty(args.url.or(file.url)).ok_or(ConfigError::Missing("AZURE_DEVOPS_URL"))?;
        let pat =
            non_empty(args.pat.or(file.pat)).ok_or(ConfigError::Missing("AZURE_DEVOPS_PAT"))?;
        let org = non_empty(args.org.or(file.org));

        let org_url = match org {
            Some(org) => format!("{}/{}", url.trim_end_matches('/'), org.trim_matches('/')),
            None => url.trim_end_matches('/').to_string(),
        };

        Ok(Self {
            azure: AzureDevOpsConfig {
                org_url,
                pat: SecretString::from(pat),
                api_version: non_empty(args.api_version.or(file.api_version))
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            },
            server: ServerConfig {
                port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
                service_name: non_empty(args.service_name.or(file.service_name))
                    .unwrap_or_else(|| "unknown".to_string()),
                transport: args.transport.or(file.transport).unwrap_or(Transport::Http),
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    fn args(url: Option<&str>, pat: Option<&str>) -> Args {
        Args {
            url: url.map(String::from),
            pat: pat.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn missing_url_is_fatal() {
        let err = Config::resolve(args(None, Some("pat")), FileConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("AZURE_DEVOPS_URL")));
    }

    #[test]
    fn blank_pat_is_fatal() {
        let err = Config::resolve(
            args(Some("https://dev.azure.com/"), Some("  ")),
            FileConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("AZURE_DEVOPS_PAT")));
    }

    #[test]
    fn org_is_appended_as_a_path_segment() {
        let mut a = args(Some("https://dev.azure.com/"), Some("pat"));
        a.org = Some("contoso".to_string());
        let config = Config::resolve(a, FileConfig::default()).unwrap();
        assert_eq!(config.azure.org_url, "https://dev.azure.com/contoso");
        assert_eq!(config.azure.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.server.service_name, "unknown");
    }

    #[test]
    fn flags_override_file_values() {
        let mut a = args(None, None);
        a.port = Some(8080);
        let file = FileConfig {
            url: Some("https://dev.azure.com/fabrikam".to_string()),
            pat: Some("from-file".to_string()),
            port: Some(9000),
            api_version: Some("7.1".to_string()),
            transport: Some(Transport::Stdio),
            ..Default::default()
        };
        let config = Config::resolve(a, file).unwrap();
        assert_eq!(config.azure.org_url, "https://dev.azure.com/fabrikam");
        assert_eq!(config.azure.pat.expose_secret(), "from-file");
        assert_eq!(config.azure.api_version, "7.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.transport, Transport::Stdio);
    }

    #[test]
    fn file_config_parses_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "url = \"https://dev.azure.com\"\norg = \"contoso\"\npat = \"abc\"\ntransport = \"stdio\""
        )
        .unwrap();
        let loaded = FileConfig::load(file.path()).unwrap();
        assert_eq!(loaded.org.as_deref(), Some("contoso"));
        assert_eq!(loaded.transport, Some(Transport::Stdio));
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"abc\"").unwrap();
        assert!(matches!(
            FileConfig::load(file.path()),
            Err(ConfigError::Toml { .. })
        ));
    }
}
