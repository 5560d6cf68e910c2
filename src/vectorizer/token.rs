use indexmap::IndexMap;

/// Count and first position of one term inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStat {
    pub count: u64,
    pub first_position: usize,
}

/// TokenFrequency
/// Per-term occurrence statistics of a single document, gathered in one pass.
/// Terms borrow from the document they were counted from.
///
/// # Examples
/// ```
/// use related_items::TokenFrequency;
/// let doc = ["rust", "fast", "rust"];
/// let freq = TokenFrequency::from_tokens(&doc);
/// assert_eq!(freq.token_count("rust"), 2);
/// assert_eq!(freq.first_position("fast"), Some(1));
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenFrequency<'a> {
    token_stats: IndexMap<&'a str, TokenStat>,
    total_token_count: u64,
}

impl<'a> TokenFrequency<'a> {
    pub fn new() -> Self {
        Self {
            token_stats: IndexMap::new(),
            total_token_count: 0,
        }
    }

    pub fn from_tokens<T>(tokens: &'a [T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        for token in tokens {
            freq.add_token(token.as_ref());
        }
        freq
    }

    /// Add the next token of the document
    #[inline]
    pub fn add_token(&mut self, token: &'a str) -> &mut Self {
        let position = self.total_token_count as usize;
        self.token_stats
            .entry(token)
            .and_modify(|stat| stat.count += 1)
            .or_insert(TokenStat {
                count: 1,
                first_position: position,
            });
        self.total_token_count += 1;
        self
    }

    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_stats.get(token).map_or(0, |stat| stat.count)
    }

    #[inline]
    pub fn first_position(&self, token: &str) -> Option<usize> {
        self.token_stats.get(token).map(|stat| stat.first_position)
    }

    /// Total number of tokens, repetitions and marker remnants included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_stats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }

    /// Distinct tokens in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, TokenStat)> + '_ {
        self.token_stats.iter().map(|(token, stat)| (*token, *stat))
    }
}
