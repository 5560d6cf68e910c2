use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    tokenizer::section::SectionMarker,
};

/// Boost applied to a term according to the field it first appears in.
///
/// # Deserialization
/// Every field is optional and falls back to its default.
/// ```
/// use related_items::SectionWeights;
/// let weights: SectionWeights = serde_json::from_str(r#"{ "title": 4.0 }"#).unwrap();
/// assert_eq!(weights.title, 4.0);
/// assert_eq!(weights.tags, 1.5);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SectionWeights {
    pub title: f64,
    pub short_description: f64,
    pub tags: f64,
    /// used when section markers cannot be located, and for the marker tokens themselves
    pub default: f64,
}

impl Default for SectionWeights {
    fn default() -> Self {
        Self {
            title: 3.0,
            short_description: 2.0,
            tags: 1.5,
            default: 1.0,
        }
    }
}

impl SectionWeights {
    /// Reject weights that would produce negative or non finite scores
    pub fn validate(&self) -> Result<()> {
        let all = [self.title, self.short_description, self.tags, self.default];
        if all.iter().all(|w| w.is_finite() && *w >= 0.0) {
            Ok(())
        } else {
            Err(Error::InvalidArgument("section weights must be finite and non-negative"))
        }
    }

    #[inline]
    pub fn for_section(&self, section: Option<SectionMarker>) -> f64 {
        match section {
            Some(SectionMarker::Title) => self.title,
            Some(SectionMarker::ShortDescription) => self.short_description,
            Some(SectionMarker::Tags) => self.tags,
            None => self.default,
        }
    }

    /// Weight of a term whose first occurrence is at `position`
    #[inline]
    pub fn weight_at(&self, bounds: Option<&SectionBounds>, position: usize) -> f64 {
        self.for_section(bounds.and_then(|b| b.section_of(position)))
    }
}

/// Positions of the three marker remnants inside one token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub title: usize,
    pub short_description: usize,
    pub tags: usize,
}

impl SectionBounds {
    /// Locate the markers in a single forward scan.
    ///
    /// Each boundary is the first occurrence of its lead token (`title`,
    /// `short`, `tags`) anywhere in the stream, so a marker word inside the
    /// content can move a boundary. Returns `None` unless all three are found.
    pub fn locate<T>(tokens: &[T]) -> Option<Self>
    where
        T: AsRef<str>,
    {
        let (mut title, mut short_description, mut tags) = (None, None, None);
        for (i, token) in tokens.iter().map(AsRef::<str>::as_ref).enumerate() {
            let slot = match token {
                t if t == SectionMarker::Title.lead_token() => &mut title,
                t if t == SectionMarker::ShortDescription.lead_token() => &mut short_description,
                t if t == SectionMarker::Tags.lead_token() => &mut tags,
                _ => continue,
            };
            slot.get_or_insert(i);
        }

        Some(Self {
            title: title?,
            short_description: short_description?,
            tags: tags?,
        })
    }

    /// Section a position belongs to; marker positions themselves belong to none
    pub fn section_of(&self, position: usize) -> Option<SectionMarker> {
        if position > self.title && position < self.short_description {
            Some(SectionMarker::Title)
        } else if position > self.short_description && position < self.tags {
            Some(SectionMarker::ShortDescription)
        } else if position > self.tags {
            Some(SectionMarker::Tags)
        } else {
            None
        }
    }
}
