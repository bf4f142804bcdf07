//! Candidate destination URLs for a version switch
//!
//! Substitutes the version segment of the current URL with the selected
//! version and derives the selected version's root URL as the fallback for
//! when the exact page does not exist under that version.

use crate::switcher::error::SwitchError;
use crate::switcher::segment::SegmentExtractor;

/// Destination URLs for a version switch, in probe order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCandidates {
    /// The current URL with the version segment substituted
    pub candidate: String,
    /// Root URL of the selected version, used when the candidate page does
    /// not exist under that version
    pub fallback: String,
}

impl SwitchCandidates {
    /// Candidate URLs in probe order, deduplicated.
    ///
    /// When the current page is the version root itself, the candidate and
    /// the fallback coincide and a single-element list is returned.
    pub fn into_urls(self) -> Vec<String> {
        if self.candidate == self.fallback {
            vec![self.candidate]
        } else {
            vec![self.candidate, self.fallback]
        }
    }
}

/// Compute the candidate URLs for switching `current_url` to `selected`.
///
/// Returns `Ok(None)` when the selected version is already the current one:
/// the substitution leaves the URL unchanged and there is nothing to do.
/// Returns an error when the URL carries no recognizable version segment,
/// since no substitution target can be computed.
pub fn switch_candidates(
    extractor: &SegmentExtractor,
    selected: &str,
    current_url: &str,
) -> Result<Option<SwitchCandidates>, SwitchError> {
    let current_segment = extractor
        .extract(current_url)
        .ok_or_else(|| SwitchError::NoVersionSegment(current_url.to_string()))?;

    let needle = format!("/{current_segment}");
    let replacement = format!("/{selected}/");

    // The segment was extracted from this URL, so the needle is present.
    let Some(pos) = current_url.find(&needle) else {
        return Err(SwitchError::NoVersionSegment(current_url.to_string()));
    };

    let candidate = format!(
        "{}{}{}",
        &current_url[..pos],
        replacement,
        &current_url[pos + needle.len()..]
    );
    if candidate == current_url {
        return Ok(None);
    }

    // Everything up to and including the substituted segment
    let fallback = candidate[..pos + replacement.len()].to_string();

    Ok(Some(SwitchCandidates {
        candidate,
        fallback,
    }))
}
