/// Options for configuring a search (see [`best_first_search_with_config`](crate::best_first_search_with_config))
///
/// Default options:
/// ```
/// # use best_first_search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         size_hint: 32,
///         expansion_limit: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The number of Nodes the search is expected to touch (defaults to `32`).
    ///
    /// Only used to pre-allocate the frontier and the visited set. Searches that touch more
    /// Nodes simply grow those.
    pub size_hint: usize,
    /// `None` (default): expand Nodes until the goal is found or the frontier is empty.
    ///
    /// `Some(limit)`: give up after `limit` Nodes were expanded without finding the goal.
    /// The search then ends with [`SearchOutcome::LimitReached`](crate::SearchOutcome::LimitReached).
    pub expansion_limit: Option<usize>,
}

impl SearchConfig {
    /// a SearchConfig that searches until the frontier runs out
    ///
    /// Values:
    /// ```
    /// # use best_first_search::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         size_hint: 32,
    ///         expansion_limit: None,
    ///     },
    ///     SearchConfig::UNBOUNDED
    /// );
    /// ```
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        size_hint: 32,
        expansion_limit: None,
    };

    /// Creates a default SearchConfig that expands at most `limit` Nodes
    ///
    /// ```
    /// # use best_first_search::SearchConfig;
    /// let config = SearchConfig::with_expansion_limit(100);
    /// assert_eq!(config.expansion_limit, Some(100));
    /// assert_eq!(config.size_hint, SearchConfig::default().size_hint);
    /// ```
    pub fn with_expansion_limit(limit: usize) -> SearchConfig {
        SearchConfig {
            expansion_limit: Some(limit),
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
