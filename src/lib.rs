//! Quantheo Labs viewer.
//!
//! Locates pre-built HTML visualizations across the directory layouts the
//! app may be deployed in, and embeds them in a small web shell. When an
//! asset cannot be found, the shell shows what was tried and what is on disk.

pub mod cli;
pub mod config;
pub mod pages;
pub mod resolver;
pub mod server;
