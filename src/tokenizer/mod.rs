pub mod section;
pub mod stop_words;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tokenizer::{section::SectionMarker, stop_words::is_stop_word};

/// Document
/// Ordered token sequence of one content item, section marker remnants included.
/// Built once by [`tokenize`] and never modified afterwards.
///
/// Derefs to `[String]`, so it can be passed anywhere a token slice is expected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl Deref for Document {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl AsRef<[String]> for Document {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

impl From<Vec<String>> for Document {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl<S> FromIterator<S> for Document
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Free-text fields of one content item, as handed over by the content store.
///
/// `title` and `short_description` are optional only so that a JSON `null`
/// can be represented; tokenizing a record with an absent field fails.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "shortDescription")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RawFields {
    pub fn new<T>(title: &str, short_description: &str, tags: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            title: Some(title.to_string()),
            short_description: Some(short_description.to_string()),
            tags: tags.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Tokenize the record
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the title or the short description is absent.
    /// Empty strings are fine.
    pub fn tokenize(&self) -> Result<Document> {
        let title = self
            .title
            .as_deref()
            .ok_or(Error::InvalidArgument("title must not be null"))?;
        let short_description = self
            .short_description
            .as_deref()
            .ok_or(Error::InvalidArgument("short description must not be null"))?;
        Ok(tokenize(title, short_description, &self.tags))
    }
}

/// Turn the fields of one item into its normalized token stream.
///
/// The fields are laid out as `|title| <title> |short_description| <short
/// description> |tags| <tag>...`, joined with single spaces, case folded,
/// stripped of everything outside `[a-z0-9]` and whitespace, split on
/// whitespace and filtered against the stop-word set. Order is preserved and
/// duplicates are kept.
///
/// # Examples
/// ```
/// use related_items::tokenize;
/// let doc = tokenize("Hello, Rust!", "A short intro", &["C#"]);
/// assert_eq!(
///     doc.tokens(),
///     ["title", "hello", "rust", "short", "description", "short", "intro", "tags", "c"]
/// );
/// ```
pub fn tokenize<T>(title: &str, short_description: &str, tags: &[T]) -> Document
where
    T: AsRef<str>,
{
    let mut fields: Vec<&str> = Vec::with_capacity(5 + tags.len());
    fields.push(SectionMarker::Title.raw());
    fields.push(title);
    fields.push(SectionMarker::ShortDescription.raw());
    fields.push(short_description);
    fields.push(SectionMarker::Tags.raw());
    fields.extend(tags.iter().map(|t| t.as_ref()));

    let text = normalize(&fields.join(" "));
    text.split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Case fold `text` and replace every maximal run of characters outside
/// `[a-z0-9]` and whitespace with one space.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }
    out
}
