//! OSINT Scrubber Library
//!
//! Lists a company's employees through the SerpAPI LinkedIn engine, checks
//! each name against the DeHashed breach database, and writes the aggregated
//! results to a JSON file.
//!
//! # Modules
//!
//! - `cli`: Command-line arguments.
//! - `config`: Validated run configuration.
//! - `errors`: Error handling types.
//! - `models`: Lookup results and the result mapping.
//! - `output`: JSON encoding and file output.
//! - `pipeline`: The search-then-lookup run.
//! - `services`: External service clients (SerpAPI, DeHashed).

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
