//! Documentation version switcher
//!
//! Implements the version-selector widget of a static documentation site:
//! rendering the version dropdown for the current page and resolving the
//! destination URL when the reader picks a different version.

pub mod config;
pub mod switcher;
