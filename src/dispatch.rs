//! Builds the alert request that gets handed to the screen.
//!
//! A request supplied on the command line wins; otherwise the next lead is
//! drawn from the rotation pool. Flags are scanned by hand, no parser crate.

use crate::leads::{AlertRequest, LeadPool};

/// Command-line flags understood by the binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub name: Option<String>,
    pub location: Option<String>,
    pub score: Option<String>,
    /// Disable full-screen and always-on-top, for development.
    pub windowed: bool,
    /// Lower the default log filter to debug.
    pub verbose: bool,
    /// Flags the scanner did not recognize; reported once logging is up.
    pub unknown: Vec<String>,
}

impl CliArgs {
    /// Scan program arguments (without the program name).
    pub fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => parsed.name = args.next(),
                "--location" => parsed.location = args.next(),
                "--score" => parsed.score = args.next(),
                "--windowed" => parsed.windowed = true,
                "-log" | "--log" => parsed.verbose = true,
                _ => parsed.unknown.push(arg),
            }
        }
        parsed
    }

    /// Whether any of the lead fields was supplied explicitly.
    pub fn has_lead_override(&self) -> bool {
        self.name.is_some() || self.location.is_some() || self.score.is_some()
    }
}

/// Turns CLI overrides or the lead pool into alert requests.
pub struct AlertDispatcher {
    pool: LeadPool,
}

impl AlertDispatcher {
    pub fn new(pool: LeadPool) -> Self {
        Self { pool }
    }

    /// Build the request for the next alert.
    ///
    /// Overrides bypass the pool entirely; fields left unset render blank.
    /// An empty pool without overrides yields an all-blank request.
    pub fn next_request(&mut self, args: &CliArgs) -> AlertRequest {
        if args.has_lead_override() {
            return AlertRequest {
                lead_name: args.name.clone().unwrap_or_default(),
                lead_location: args.location.clone().unwrap_or_default(),
                match_score: args.score.clone().unwrap_or_default(),
            };
        }
        match self.pool.next() {
            Some(lead) => {
                tracing::info!(lead = lead.id.as_str(), "Dispatching lead alert");
                AlertRequest::from(&lead)
            }
            None => {
                tracing::warn!("Lead pool is empty; dispatching a blank alert");
                AlertRequest::default()
            }
        }
    }
}
