/*!
 * Path exclusion rules
 *
 * An entry is excluded when any exclusion token occurs anywhere in its path,
 * as a plain substring. `mydist/readme.txt` is excluded by `dist`.
 */

/// Tokens excluded when no custom set is supplied
pub const DEFAULT_EXCLUSIONS: [&str; 7] = [
    "__pycache__",
    ".git",
    "venv",
    ".venv",
    "node_modules",
    "dist",
    "build",
];

/// Immutable set of exclusion tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    tokens: Vec<String>,
}

impl ExclusionSet {
    /// Create a set from arbitrary tokens; empty tokens are dropped
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for token in tokens.into_iter().map(Into::into) {
            // An empty token would match every path
            if !token.is_empty() && !set.contains(&token) {
                set.push(token);
            }
        }
        Self { tokens: set }
    }

    /// A set that excludes nothing
    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Return a new set with extra tokens appended
    pub fn with_extra<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            self.tokens
                .iter()
                .cloned()
                .chain(extra.into_iter().map(Into::into)),
        )
    }

    /// Tokens in this set
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }
}

/// Decides whether a filesystem entry is excluded from analysis
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    exclusions: ExclusionSet,
}

impl PathFilter {
    /// Create a filter over the given exclusion set
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Check if a path contains any exclusion token
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions
            .tokens()
            .iter()
            .any(|token| path.contains(token.as_str()))
    }
}
