//! Toolbelt - Lightweight HTTP tool registry and invocation service
//!
//! This library exposes the tool functions, the manifest, the axum router,
//! and the generic client, enabling in-process integration tests and reuse
//! of the client from other binaries.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod state;
pub mod tools;

// Re-export key types for convenience
pub use client::{parse_kv_args, prompt_params, Invocation, ToolClient};
pub use config::{ClientConfig, Config};
pub use error::{AppError, ClientError, Result};
pub use registry::{Manifest, ToolDescriptor};
pub use router::build_router;
pub use state::AppState;
