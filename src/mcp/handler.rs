use crate::facility::Catalog;
use crate::tools::ToolRegistry;
use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

/// MCP server exposing the extraction tools over a shared, read-only catalog
#[derive(Clone)]
pub struct FacilityServer {
    catalog: Arc<Catalog>,
    tool_registry: Arc<ToolRegistry>,
    tool_router: ToolRouter<Self>,
}

impl FacilityServer {
    /// Create a server backed by the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Create a server backed by a custom catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tool_registry: Arc::new(ToolRegistry::with_defaults()),
            tool_router: Self::tool_router(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }
}

impl Default for FacilityServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for FacilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Golf facility extraction: project scraped HTML into JSON node trees and pick \
                 facility elements out with tag/attribute selectors."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
