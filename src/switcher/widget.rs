//! The assembled per-page version-switch component

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::config::PageContext;
use crate::switcher::error::SwitchError;
use crate::switcher::navigator::switch_candidates;
use crate::switcher::probe::UrlProbe;
use crate::switcher::registry::VersionRegistry;
use crate::switcher::resolver::resolve_first_existing;
use crate::switcher::segment::SegmentExtractor;
use crate::switcher::select::build_version_select;

/// Version-switch widget for one documentation page.
///
/// Owns the version registry and the existence probe. The page context is
/// passed in explicitly instead of being read from an ambient global, so the
/// component can be constructed and tested in isolation.
pub struct VersionSwitcher {
    registry: VersionRegistry,
    extractor: SegmentExtractor,
    probe: Arc<dyn UrlProbe>,
    context: PageContext,
    /// Bumped on every switch; a probe that completes after a newer switch
    /// has started must not win.
    generation: AtomicU64,
}

impl VersionSwitcher {
    pub fn new(registry: VersionRegistry, probe: Arc<dyn UrlProbe>, context: PageContext) -> Self {
        Self {
            registry,
            extractor: SegmentExtractor::new(),
            probe,
            context,
            generation: AtomicU64::new(0),
        }
    }

    /// Markup for the version dropdown on the current page
    pub fn render_select(&self) -> String {
        build_version_select(&self.registry, &self.context.version, &self.context.release)
    }

    /// Resolve the destination URL for switching the current page to
    /// `selected`.
    ///
    /// Returns `Ok(None)` when the selection is already the current version,
    /// or when this call was superseded by a newer switch while its probe was
    /// in flight.
    pub async fn switch(&self, selected: &str) -> Result<Option<String>, SwitchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(candidates) = switch_candidates(&self.extractor, selected, &self.context.url)?
        else {
            debug!("Selected version {} is already active", selected);
            return Ok(None);
        };

        let destination =
            resolve_first_existing(self.probe.as_ref(), candidates.into_urls()).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Switch to {} was superseded by a newer selection", selected);
            return Ok(None);
        }

        if let Some(url) = &destination {
            info!("Switching to version {}: {}", selected, url);
        }
        Ok(destination)
    }
}
