//! The tool registry: a static catalog of every tool the service exposes.
//!
//! The manifest is the machine-readable contract between the service and
//! any generic client. Descriptors are declared once here; the router in
//! `main.rs` must keep a live route for every endpoint listed (the
//! integration tests assert the two stay in sync).

use serde::{Deserialize, Serialize};

/// Identifier for this server inside the manifest's `mcpServers` map.
/// A client aggregating several tool services keys descriptors by this.
pub const SERVER_ID: &str = "toolbelt";

/// One entry in the manifest: how to call a single tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool name, also the key clients invoke by
    pub name: String,
    /// HTTP path on this server
    pub endpoint: String,
    /// HTTP verb (always "GET" for this service)
    pub method: String,
    /// Human-readable summary shown by `list`
    pub description: String,
}

/// The manifest document served at `/mcp-config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: std::collections::BTreeMap<String, ServerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEntry {
    pub url: String,
    pub description: String,
    pub tools: Vec<ToolDescriptor>,
}

impl Manifest {
    /// Descriptors for this service's server entry, empty if absent.
    pub fn tools(&self) -> &[ToolDescriptor] {
        self.mcp_servers
            .get(SERVER_ID)
            .map(|entry| entry.tools.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a descriptor by tool name.
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools().iter().find(|tool| tool.name == name)
    }

    /// All tool names, in manifest order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools().iter().map(|tool| tool.name.as_str()).collect()
    }
}

fn descriptor(name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        name: name.to_string(),
        endpoint: format!("/tools/{}", name),
        method: "GET".to_string(),
        description: description.to_string(),
    }
}

/// The static, ordered descriptor set. One entry per tool function.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        descriptor("hello", "Returns a personalized greeting message"),
        descriptor("add", "Adds two integers and returns the sum"),
        descriptor("multiply", "Multiplies two numbers and returns the product"),
        descriptor(
            "temp-convert",
            "Converts a Celsius temperature to Fahrenheit and Kelvin",
        ),
        descriptor(
            "analyze-text",
            "Returns character, word, case and digit statistics for a text",
        ),
        descriptor(
            "sqrt",
            "Calculates the principal square root of a non-negative number",
        ),
    ]
}

/// Build the full manifest document for a server reachable at `base_url`.
pub fn manifest(base_url: &str) -> Manifest {
    let entry = ServerEntry {
        url: base_url.trim_end_matches('/').to_string(),
        description: "Stateless calculator and text-utility tools over HTTP".to_string(),
        tools: descriptors(),
    };

    let mut mcp_servers = std::collections::BTreeMap::new();
    mcp_servers.insert(SERVER_ID.to_string(), entry);

    Manifest { mcp_servers }
}
