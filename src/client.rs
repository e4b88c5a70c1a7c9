//! Generic tool client.
//!
//! Discovers the manifest and invokes tools by name. Routing always comes
//! from a freshly fetched manifest, so the server's catalog is the single
//! source of truth; the client carries no endpoint table of its own.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::registry::Manifest;
use serde_json::Value;
use std::time::Duration;

/// Outcome of a tool invocation that reached the server. Non-200 responses
/// are surfaced verbatim rather than interpreted.
#[derive(Debug)]
pub enum Invocation {
    Success(Value),
    Failed { status: u16, body: String },
}

pub struct ToolClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl ToolClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch the manifest from `/mcp-config`.
    pub fn discover(&self) -> Result<Manifest, ClientError> {
        let url = format!("{}/mcp-config", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|err| self.map_send_error(err))?;

        let manifest: Manifest = response
            .error_for_status()
            .map_err(ClientError::Request)?
            .json()
            .map_err(|err| ClientError::Manifest(err.to_string()))?;

        if manifest.tools().is_empty() {
            return Err(ClientError::Manifest(
                "manifest contains no tool descriptors".to_string(),
            ));
        }
        Ok(manifest)
    }

    /// Invoke `name` with query parameters, routing via the manifest.
    pub fn invoke(&self, name: &str, params: &[(String, String)]) -> Result<Invocation, ClientError> {
        let manifest = self.discover()?;

        let descriptor = manifest.find(name).ok_or_else(|| ClientError::UnknownTool {
            name: name.to_string(),
            known: manifest
                .tool_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })?;

        let url = format!("{}{}", self.config.base_url, descriptor.endpoint);
        tracing::debug!(tool = name, url = %url, "Invoking tool");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .map_err(|err| self.map_send_error(err))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(ClientError::Request)?;

        if status == 200 {
            let value: Value = serde_json::from_str(&body)
                .map_err(|err| ClientError::Manifest(format!("invalid JSON response: {}", err)))?;
            Ok(Invocation::Success(value))
        } else {
            Ok(Invocation::Failed { status, body })
        }
    }

    /// Quick reachability probe against the root route.
    pub fn check_server(&self) -> bool {
        self.http
            .get(&self.config.base_url)
            .timeout(Duration::from_secs(2))
            .send()
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() || err.is_timeout() {
            ClientError::Unreachable {
                url: self.config.base_url.clone(),
                source: err,
            }
        } else {
            ClientError::Request(err)
        }
    }
}

/// Parameter names each tool prompts for in interactive mode. The manifest
/// describes routing but deliberately not parameters, so this stays local.
pub fn prompt_params(tool: &str) -> Option<&'static [&'static str]> {
    match tool {
        "hello" => Some(&["name"]),
        "add" | "multiply" => Some(&["a", "b"]),
        "temp-convert" => Some(&["celsius"]),
        "analyze-text" => Some(&["text"]),
        "sqrt" => Some(&["number"]),
        _ => None,
    }
}

/// Parse CLI `key=value` arguments. Values may themselves contain `=`.
pub fn parse_kv_args(args: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => anyhow::bail!("invalid parameter '{}', expected key=value", arg),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_kv_args_basic() {
        let parsed = parse_kv_args(&strings(&["a=10", "b=20"])).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("a".to_string(), "10".to_string()),
                ("b".to_string(), "20".to_string())
            ]
        );
    }

    #[test]
    fn parse_kv_args_value_may_contain_equals() {
        let parsed = parse_kv_args(&strings(&["text=a=b"])).unwrap();
        assert_eq!(parsed, vec![("text".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn parse_kv_args_rejects_bare_tokens() {
        assert!(parse_kv_args(&strings(&["novalue"])).is_err());
        assert!(parse_kv_args(&strings(&["=orphan"])).is_err());
    }

    #[test]
    fn prompt_params_covers_every_tool() {
        for tool in crate::registry::descriptors() {
            assert!(
                prompt_params(&tool.name).is_some(),
                "no prompt table entry for {}",
                tool.name
            );
        }
        assert!(prompt_params("nope").is_none());
    }

    #[test]
    fn unreachable_server_is_reported_not_panicked() {
        // Nothing listens on this port; connect must fail fast and cleanly.
        let client = ToolClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        assert!(!client.check_server());
        match client.discover() {
            Err(ClientError::Unreachable { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:9");
            }
            other => panic!("expected Unreachable, got {:?}", other.map(|_| ())),
        }
    }
}
