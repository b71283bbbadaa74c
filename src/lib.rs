//! # Production Agent
//!
//! A minimal production-deployment demo for a conversational agent.
//!
//! This library provides:
//! - Environment-driven configuration with sensible defaults
//! - A single agent definition (prompt sections, language/voice, three tools)
//! - An HTTP server exposing the agent plus health/readiness/info probes
//!
//! The heavy lifting of a real deployment (dialogue state, function-call
//! wire protocol, server lifecycle) belongs to the hosting agent framework;
//! this crate is the thin configuration and integration layer around it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use production_agent::{api, config::Config};
//!
//! let config = Config::from_env()?;
//! api::serve(config).await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod logging;

pub use config::Config;
