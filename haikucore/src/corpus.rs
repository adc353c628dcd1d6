//! Law corpus — loading `api.json` and drawing haikus from it
//!
//! The data file is a single document:
//!
//! ```json
//! { "laws": [ { "name": "...", "url": "...", "haikus": ["...", "..."] } ] }
//! ```
//!
//! Every field is required. A malformed file is rejected as a whole.

use crate::error::{HaikuError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;

/// Marks a haiku about a provision that is not yet in effect.
/// Such entries are placeholders and never shown.
pub const FORBIDDEN_MARKER: &str = " 施行する";

/// Full-width space used in place of every other space so that
/// CJK lines keep an even rhythm on screen.
pub const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Default ceiling for rejection sampling in [`Corpus::pick_random_haiku`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// One law and the haikus written about it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LawEntry {
    pub name: String,
    pub url: String,
    pub haikus: Vec<String>,
}

#[derive(Deserialize)]
struct LawsDocument {
    laws: Vec<LawEntry>,
}

/// A haiku picked for display, paired with the law it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaikuDetails {
    pub text: String,
    pub law_name: String,
    pub law_url: String,
}

/// Parse a laws document.
pub fn load_laws(json: &str) -> Result<Vec<LawEntry>> {
    let doc: LawsDocument = serde_json::from_str(json)?;
    Ok(doc.laws)
}

/// Read and parse a laws document from disk.
pub fn load_laws_from_path(path: impl AsRef<Path>) -> Result<Vec<LawEntry>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| HaikuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let laws = load_laws(&json)?;
    tracing::info!(path = %path.display(), laws = laws.len(), "loaded law corpus");
    Ok(laws)
}

/// Whether a haiku may be shown at all.
pub fn is_eligible(haiku: &str) -> bool {
    !haiku.contains(FORBIDDEN_MARKER)
}

/// Replace every space-like character (newlines excepted) with a full-width space.
pub fn normalize_spaces(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_whitespace() && c != '\n' && c != '\r' {
                FULL_WIDTH_SPACE
            } else {
                c
            }
        })
        .collect()
}

/// Immutable set of laws, checked to contain at least one eligible haiku.
#[derive(Debug, Clone)]
pub struct Corpus {
    laws: Vec<LawEntry>,
    max_attempts: usize,
}

impl Corpus {
    /// Wrap loaded laws. Fails when nothing in them could ever be displayed,
    /// so that sampling cannot spin forever.
    pub fn new(laws: Vec<LawEntry>, max_attempts: usize) -> Result<Self> {
        let max_attempts = max_attempts.max(1);
        let corpus = Self { laws, max_attempts };
        if corpus.eligible_count() == 0 {
            return Err(HaikuError::EmptyCorpus);
        }
        Ok(corpus)
    }

    pub fn laws(&self) -> &[LawEntry] {
        &self.laws
    }

    pub fn len(&self) -> usize {
        self.laws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    /// Number of haikus across all laws that pass [`is_eligible`].
    pub fn eligible_count(&self) -> usize {
        self.laws
            .iter()
            .flat_map(|law| law.haikus.iter())
            .filter(|h| is_eligible(h))
            .count()
    }

    /// Pick a law uniformly, then one of its haikus uniformly, retrying the
    /// whole draw when the law is empty or the haiku is a placeholder.
    pub fn pick_random_haiku<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<HaikuDetails> {
        for _ in 0..self.max_attempts {
            let Some(law) = self.laws.choose(rng) else {
                break;
            };
            let Some(haiku) = law.haikus.choose(rng) else {
                continue;
            };
            if !is_eligible(haiku) {
                continue;
            }
            return Ok(HaikuDetails {
                text: normalize_spaces(haiku),
                law_name: law.name.clone(),
                law_url: law.url.clone(),
            });
        }
        Err(HaikuError::NoEligibleHaiku {
            attempts: self.max_attempts,
        })
    }
}
