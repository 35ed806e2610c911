//! Static asset constants.

/// Stylesheet for the viewer shell.
pub const CSS: &str = include_str!("styles.css");
