//! First-existing-URL resolution over an ordered candidate list

use tracing::debug;

use crate::switcher::probe::UrlProbe;

/// Walk `candidates` in order and return the first URL that exists.
///
/// Candidates are probed one at a time; the first success short-circuits the
/// walk. The last remaining candidate is returned without probing: it is the
/// guaranteed fallback, so checking it would not change the outcome. A probe
/// failure (network error included) counts as "does not exist" and the walk
/// moves on. Returns `None` only for an empty candidate list.
pub async fn resolve_first_existing(
    probe: &dyn UrlProbe,
    candidates: Vec<String>,
) -> Option<String> {
    let mut remaining = candidates.into_iter().peekable();

    while let Some(url) = remaining.next() {
        if remaining.peek().is_none() {
            debug!("Using last-resort candidate without probing: {}", url);
            return Some(url);
        }

        match probe.exists(&url).await {
            Ok(true) => return Some(url),
            Ok(false) => debug!("Candidate does not exist, trying next: {}", url),
            Err(e) => debug!("Probe failed for {} ({}), trying next", url, e),
        }
    }

    None
}
