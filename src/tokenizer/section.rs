/// Synthetic tokens injected in front of each field so that a flat token
/// stream still knows which field a term came from.
///
/// The raw marker passes through the same character stripping as the field
/// text, so `|short_description|` ends up as the two tokens `short` and
/// `description`. Section lookup works on those surviving tokens, never on
/// the raw marker string. Keeping the decoration would change every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionMarker {
    Title,
    ShortDescription,
    Tags,
}

impl SectionMarker {
    /// Markers in stream order
    pub const ALL: [SectionMarker; 3] = [
        SectionMarker::Title,
        SectionMarker::ShortDescription,
        SectionMarker::Tags,
    ];

    /// Marker text as injected before normalization
    pub fn raw(&self) -> &'static str {
        match self {
            SectionMarker::Title => "|title|",
            SectionMarker::ShortDescription => "|short_description|",
            SectionMarker::Tags => "|tags|",
        }
    }

    /// First token the marker leaves behind after normalization
    pub fn lead_token(&self) -> &'static str {
        match self {
            SectionMarker::Title => "title",
            SectionMarker::ShortDescription => "short",
            SectionMarker::Tags => "tags",
        }
    }

    /// Every token the marker leaves behind after normalization
    pub fn surviving_tokens(&self) -> &'static [&'static str] {
        match self {
            SectionMarker::Title => &["title"],
            SectionMarker::ShortDescription => &["short", "description"],
            SectionMarker::Tags => &["tags"],
        }
    }
}
