//! Version-switch layer: dropdown rendering and destination resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Select    │◀────│   Widget    │────▶│  Navigator  │
//! │  (markup)   │     │ (assembly)  │     │ (candidates)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │  Resolver   │────▶│    Probe    │
//!                     │ (first hit) │     │   (HTTP)    │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: ordered mapping of version identifiers to display labels
//! - [`select`]: `<select>` markup construction for the dropdown
//! - [`segment`]: version path segment extraction from URLs
//! - [`navigator`]: candidate destination URLs for a switch
//! - [`probe`]: best-effort HTTP existence check for candidate URLs
//! - [`resolver`]: first-existing-URL resolution over a candidate list
//! - [`widget`]: the assembled per-page component
//! - [`error`]: error types for switching and probing

pub mod error;
pub mod navigator;
pub mod probe;
pub mod registry;
pub mod resolver;
pub mod segment;
pub mod select;
pub mod widget;
