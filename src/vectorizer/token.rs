use indexmap::IndexMap;

/// Split text into lowercase tokens on non-alphanumeric boundaries.
/// Empty tokens are dropped.
///
/// The whole text is lowercased before it is split: some characters lowercase
/// to more than one char (`İ` becomes `i` + U+0307), so splitting first would
/// cut tokens at different places than for already-lowercased text.
/// Fit-time and query-time text go through this same function.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|tok| !tok.is_empty())
        .map(str::to_owned)
        .collect::<Vec<String>>()
        .into_iter()
}

/// TokenFrequency
/// Counts how often each token occurs in one document.
///
/// Tokens are kept in first-seen order; counting never reorders them.
///
/// # Examples
/// ```
/// use record_search::TokenFrequency;
/// let freq = TokenFrequency::from_text("Delhi physics, DELHI");
/// assert_eq!(freq.token_count("delhi"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Tokenize `text` and count every token
    pub fn from_text(text: &str) -> Self {
        let mut freq = Self::new();
        for tok in tokenize(text) {
            freq.add_token(tok);
        }
        freq
    }

    #[inline]
    fn add_token(&mut self, token: String) {
        *self.token_count.entry(token).or_insert(0) += 1;
        self.total_token_count += 1;
    }

    /// Occurrences of `token`, 0 if unseen
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted, duplicates included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// Distinct tokens in first-seen order
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    /// `(token, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.token_count.iter().map(|(tok, &count)| (tok.as_str(), count))
    }
}
