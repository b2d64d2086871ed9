//! CLI command implementations.

pub mod cards;
pub mod config;
pub mod search;

use anyhow::{anyhow, bail, Context as _, Result};
use clap::{Args, Subcommand};
use turbo_catalog::search::{
    FilterConstraint, RangeBounds, SearchRequest, SearchSort, SortDirection,
};

use crate::context::Context;

/// Arguments shared by the query commands.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Search phrase. Omit to browse the catalog.
    pub phrase: Option<String>,

    /// Read the base request from a JSON file; other flags override it.
    #[arg(short, long)]
    pub request: Option<String>,

    /// Exact-match filter (ATTR=VALUE).
    #[arg(long, value_name = "ATTR=VALUE")]
    pub eq: Vec<String>,

    /// Any-of filter (ATTR=A,B,C).
    #[arg(long = "in", value_name = "ATTR=A,B")]
    pub any_of: Vec<String>,

    /// Range filter (ATTR=FROM..TO, either end may be empty).
    #[arg(long, value_name = "ATTR=FROM..TO")]
    pub range: Vec<String>,

    /// Only discounted products.
    #[arg(long)]
    pub on_sale: bool,

    /// Sort order (ATTRIBUTE[:ASC|DESC]), e.g. price:asc.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number (1-based).
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Page size.
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl QueryArgs {
    /// Build the request: the `--request` file if any, then the flags.
    pub fn to_request(&self, ctx: &Context) -> Result<SearchRequest> {
        let base = match &self.request {
            Some(path) => {
                let path = ctx.resolve_path(path);
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read request file: {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse request file: {}", path.display()))?
            }
            None => SearchRequest::new(),
        };
        self.apply(base)
    }

    fn apply(&self, mut request: SearchRequest) -> Result<SearchRequest> {
        if let Some(phrase) = &self.phrase {
            request.phrase = Some(phrase.clone());
        }

        for arg in &self.eq {
            let (attribute, value) = split_filter(arg)?;
            request
                .filter
                .attributes
                .insert(attribute.to_string(), FilterConstraint::Eq(value.to_string()));
        }
        for arg in &self.any_of {
            let (attribute, values) = split_filter(arg)?;
            let values = values
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            request
                .filter
                .attributes
                .insert(attribute.to_string(), FilterConstraint::In(values));
        }
        for arg in &self.range {
            let (attribute, bounds) = split_filter(arg)?;
            request
                .filter
                .attributes
                .insert(attribute.to_string(), FilterConstraint::Range(parse_range(bounds)?));
        }

        if self.on_sale {
            request.filter.on_sale_only = true;
        }
        if let Some(sort) = &self.sort {
            request.sort = Some(parse_sort(sort));
        }
        if self.page.is_some() {
            request.page = self.page;
        }
        if self.limit.is_some() {
            request.limit = self.limit;
        }

        Ok(request)
    }
}

fn split_filter(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((attribute, value)) if !attribute.trim().is_empty() => {
            Ok((attribute.trim(), value.trim()))
        }
        _ => bail!("Invalid filter '{}', expected ATTR=VALUE", arg),
    }
}

fn parse_range(bounds: &str) -> Result<RangeBounds> {
    let (from, to) = bounds
        .split_once("..")
        .ok_or_else(|| anyhow!("Invalid range '{}', expected FROM..TO", bounds))?;
    let parse = |side: &str| -> Result<Option<f64>> {
        let side = side.trim();
        if side.is_empty() {
            return Ok(None);
        }
        side.parse::<f64>()
            .map(Some)
            .with_context(|| format!("Invalid range bound '{}'", side))
    };
    Ok(RangeBounds {
        from: parse(from)?,
        to: parse(to)?,
    })
}

fn parse_sort(sort: &str) -> SearchSort {
    match sort.split_once(':') {
        Some((attribute, direction)) => SearchSort::new(
            attribute.trim(),
            SortDirection::from(direction.trim().to_string()),
        ),
        None => SearchSort {
            attribute: sort.trim().into(),
            direction: None,
        },
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
