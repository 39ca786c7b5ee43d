//! # facility-extract
//!
//! A Rust library for turning scraped golf-course facility HTML into structured data,
//! designed for booking front-ends and AI agent integration.
//!
//! ## Features
//!
//! - **Tree Projection**: Parse an HTML fragment into an ordered tree of element and text nodes
//! - **Selector Matching**: Pick elements out of a projected forest by tag and attribute values
//! - **Facility Pipeline**: Bind per-course selector templates to each scraped facility
//! - **Tool System**: The same operations as named tools with JSON parameters
//! - **MCP Server**: Model Context Protocol server exposing the tools
//!
//! ## Library Usage
//!
//! ### Projecting and Extracting
//!
//! ```rust
//! use facility_extract::{HtmlForest, NodeSelector};
//!
//! let forest = HtmlForest::parse(r#"<div data-testid="facility-42-name">Course A</div>"#);
//! let selectors = [NodeSelector::attribute("data-testid", "facility-42-name")];
//!
//! let matched = forest.extract(&selectors);
//! # #[cfg(feature = "html-parser")]
//! assert_eq!(matched[0].text_content(), "Course A");
//! ```
//!
//! ### Structuring a Scrape Response
//!
//! ```rust
//! use facility_extract::facility::{Catalog, extract_facilities};
//!
//! # fn main() -> facility_extract::Result<()> {
//! let catalog = Catalog::builtin();
//! let response = r#"{"courses": [{"id": "facility-card-42", "name": "Dyker Beach",
//!     "raw_html": "<h4 data-testid=\"facility-42-name\">Dyker Beach</h4>"}]}"#;
//!
//! let facilities = extract_facilities(&catalog, "nyc", response)?;
//! println!("{}: {} elements", facilities[0].display_name(0), facilities[0].elements().len());
//! # Ok(())
//! # }
//! ```
//!
//! ### Using the Tool System
//!
//! ```rust
//! use facility_extract::facility::Catalog;
//! use facility_extract::tools::{ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! # fn main() -> facility_extract::Result<()> {
//! let catalog = Catalog::builtin();
//! let registry = ToolRegistry::with_defaults();
//! let mut context = ToolContext::new(&catalog);
//!
//! let params = json!({"html": "<p>Tee times</p>"});
//! let result = registry.execute("project_html", params, &mut context)?;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: Node model, HTML projection, and selector matching
//! - [`facility`]: Course catalog, scrape payloads, selector templates, facility pipeline
//! - [`tools`]: Extraction operations as named tools
//! - [`error`]: Error types and result aliases
//! - [`mcp`]: Model Context Protocol server (requires `mcp-handler` feature)

pub mod dom;
pub mod error;
pub mod facility;
pub mod tools;

#[cfg(feature = "mcp-handler")]
pub mod mcp;

pub use dom::{HtmlElement, HtmlForest, HtmlNode, NodeSelector, extract, project};
pub use error::{ExtractError, Result};
pub use facility::{Catalog, Course, Facility, FacilityRecord, ScrapeResponse};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};

#[cfg(feature = "mcp-handler")]
pub use mcp::FacilityServer;
#[cfg(feature = "mcp-handler")]
pub use rmcp::ServiceExt;
