//! Command-line surface.
//!
//! ```text
//! metro-router <network-file> <start> <end> [colour]
//! ```
//!
//! Wrong argument counts are reported on stdout with the fixed messages
//! `Arguments missing!` and `Too many arguments!`, like any other answer.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::domain::{Colour, DomainError};
use crate::network::{LoadError, load_network};
use crate::planner::{ColourScheme, RouteRequest, Router};

pub const ARGUMENTS_MISSING: &str = "Arguments missing!";
pub const TOO_MANY_ARGUMENTS: &str = "Too many arguments!";

/// Find the route with the fewest stops through a colour-tagged metro network
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the network description file
    pub network: Option<PathBuf>,

    /// Origin station, destination station and optional train colour
    #[arg(allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Colours that take part in stop matching, comma separated
    #[arg(long, value_delimiter = ',', default_value = "red,green")]
    pub tagged: Vec<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Query {
        network: PathBuf,
        request: RouteRequest,
    },
    ArgumentsMissing,
    TooManyArguments,
}

impl Cli {
    /// Interpret the positional arguments.
    pub fn invocation(&self) -> Invocation {
        let Some(network) = &self.network else {
            return Invocation::ArgumentsMissing;
        };

        match self.query.as_slice() {
            [start, end] => Invocation::Query {
                network: network.clone(),
                request: RouteRequest::new(start, end, Colour::any()),
            },
            [start, end, colour] => Invocation::Query {
                network: network.clone(),
                request: RouteRequest::new(start, end, Colour::new(colour.as_str())),
            },
            [] | [_] => Invocation::ArgumentsMissing,
            _ => Invocation::TooManyArguments,
        }
    }

    /// The colour scheme selected with `--tagged`.
    pub fn colour_scheme(&self) -> ColourScheme {
        ColourScheme::new(self.tagged.iter().map(|c| Colour::new(c.trim())))
    }
}

/// Errors that stop the command from answering.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the command and return the line to print.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let (path, request) = match cli.invocation() {
        Invocation::Query { network, request } => (network, request),
        Invocation::ArgumentsMissing => return Ok(ARGUMENTS_MISSING.to_string()),
        Invocation::TooManyArguments => return Ok(TOO_MANY_ARGUMENTS.to_string()),
    };

    let network = load_network(&path)?;
    info!(
        path = %path.display(),
        stations = network.len(),
        "Loaded network"
    );

    let scheme = cli.colour_scheme();
    let outcome = Router::new(&network, &scheme).find_route(&request)?;

    if cli.json {
        Ok(serde_json::to_string(&outcome)?)
    } else {
        Ok(outcome.to_string())
    }
}
