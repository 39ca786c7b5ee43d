//! facility-extract command line
//!
//! Projects HTML, extracts elements, and structures scrape API responses from files
//! or stdin, printing JSON to stdout.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use facility_extract::dom::{HtmlForest, NodeSelector};
use facility_extract::facility::{Catalog, ScrapeRequest, extract_facilities, facility_selectors};
use facility_extract::tools::{ToolContext, ToolRegistry};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "facility-extract")]
#[command(version)]
#[command(about = "Project scraped facility HTML and extract elements with selectors")]
#[command(long_about = None)]
struct Cli {
    /// Course catalog JSON file (default: built-in catalog)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an HTML fragment into its JSON node tree
    Project {
        /// HTML file (default: stdin)
        input: Option<PathBuf>,

        /// Render the projected nodes back to HTML instead of JSON
        #[arg(long)]
        markup: bool,
    },
    /// Print the elements matching any of the given selectors
    Extract {
        /// HTML file (default: stdin)
        input: Option<PathBuf>,

        /// JSON array of selectors, e.g. '[{"tag": "h4"}]'
        #[arg(long, value_name = "JSON")]
        selectors: Option<String>,

        /// Tag name for an additional selector
        #[arg(long)]
        tag: Option<String>,

        /// Attribute match for the additional selector (repeatable)
        #[arg(long = "attr", value_name = "NAME=VALUE")]
        attributes: Vec<String>,

        /// Bind `data-testid` templates to this facility id before matching
        #[arg(long, value_name = "ID")]
        facility_id: Option<String>,

        /// Render matches as HTML instead of JSON
        #[arg(long)]
        markup: bool,
    },
    /// Structure a scrape API response for a catalog course
    Facilities {
        /// Course id from the catalog
        course: String,

        /// Scrape API response JSON file (default: stdin)
        response: Option<PathBuf>,
    },
    /// List catalog courses grouped by state
    Courses {
        /// Only list courses in this state
        #[arg(long)]
        state: Option<String>,
    },
    /// Print the scrape API request body for a course
    Request {
        /// Course id from the catalog
        course: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::Project { input, markup } => {
            let forest = HtmlForest::parse(&read_input(input.as_deref())?);
            log::info!(
                "Projected {} top-level nodes ({} elements)",
                forest.len(),
                forest.count_elements()
            );
            if markup {
                println!("{}", forest.to_markup());
            } else {
                print_json(&forest, cli.pretty)?;
            }
        }
        Command::Extract {
            input,
            selectors,
            tag,
            attributes,
            facility_id,
            markup,
        } => {
            let mut selectors = parse_selectors(selectors.as_deref(), tag, &attributes)?;
            if let Some(id) = &facility_id {
                selectors = facility_selectors(&selectors, id);
            }
            if selectors.is_empty() {
                bail!("No selectors given: use --selectors, --tag or --attr");
            }

            let forest = HtmlForest::parse(&read_input(input.as_deref())?);
            let matched = forest.extract(&selectors);
            log::info!("Matched {} elements", matched.len());

            if markup {
                for node in matched {
                    println!("{}", node.to_markup());
                }
            } else {
                print_json(&matched, cli.pretty)?;
            }
        }
        Command::Facilities { course, response } => {
            let response = read_input(response.as_deref())?;
            let facilities = extract_facilities(&catalog, &course, &response)?;
            for (i, facility) in facilities.iter().enumerate() {
                log::info!(
                    "{}: {} elements",
                    facility.display_name(i),
                    facility.elements().len()
                );
            }
            print_json(&facilities, cli.pretty)?;
        }
        Command::Courses { state } => {
            let registry = ToolRegistry::with_defaults();
            let mut context = ToolContext::new(&catalog);
            let params = serde_json::json!({ "state": state });
            let result = registry.execute("list_courses", params, &mut context)?;
            if !result.success {
                bail!(result.error.unwrap_or_else(|| "list_courses failed".to_string()));
            }
            print_json(&result.data.unwrap_or_default()["states"], cli.pretty)?;
        }
        Command::Request { course } => {
            let course = catalog.require_course(&course)?;
            print_json(&ScrapeRequest::for_course(course), cli.pretty)?;
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path (or `-`) is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn parse_selectors(
    json: Option<&str>,
    tag: Option<String>,
    attributes: &[String],
) -> Result<Vec<NodeSelector>> {
    let mut selectors: Vec<NodeSelector> = match json {
        Some(json) => serde_json::from_str(json).context("Invalid --selectors JSON")?,
        None => Vec::new(),
    };

    if tag.is_some() || !attributes.is_empty() {
        let mut selector = NodeSelector::new();
        selector.tag = tag;
        for pair in attributes {
            let Some((name, value)) = pair.split_once('=') else {
                bail!("Invalid --attr '{}', expected NAME=VALUE", pair);
            };
            selector = selector.with_attribute(name, value);
        }
        selectors.push(selector);
    }

    Ok(selectors)
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
