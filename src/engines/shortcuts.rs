//! Keyword shortcuts
//!
//! A shortcut is a short first token (`gh react hooks`) that jumps straight to
//! a site's own search instead of the selected engine.

use std::collections::HashMap;

/// Target of a shortcut prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Label shown by the direct mode indicator
    pub display_name: &'static str,
    /// URL the encoded remainder of the query is appended to
    pub url_prefix: &'static str,
}

/// Immutable table of built-in shortcuts, keyed by lowercase prefix
#[derive(Debug, Clone)]
pub struct ShortcutTable {
    entries: HashMap<&'static str, Shortcut>,
}

impl ShortcutTable {
    /// The built-in shortcut set
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "gh",
            Shortcut {
                display_name: "GitHub",
                url_prefix: "https://github.com/search?q=",
            },
        );
        entries.insert(
            "yt",
            Shortcut {
                display_name: "YouTube",
                url_prefix: "https://www.youtube.com/results?search_query=",
            },
        );
        entries.insert(
            "bili",
            Shortcut {
                display_name: "Bilibili",
                url_prefix: "https://search.bilibili.com/all?keyword=",
            },
        );
        entries.insert(
            "wiki",
            Shortcut {
                display_name: "Wikipedia",
                url_prefix: "https://zh.wikipedia.org/wiki/",
            },
        );
        entries.insert(
            "z",
            Shortcut {
                display_name: "Zhihu",
                url_prefix: "https://www.zhihu.com/search?q=",
            },
        );
        entries.insert(
            "db",
            Shortcut {
                display_name: "Douban",
                url_prefix: "https://www.douban.com/search?q=",
            },
        );
        Self { entries }
    }

    /// An empty table, for callers that disable shortcuts
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a prefix; matching is case-insensitive
    pub fn get(&self, prefix: &str) -> Option<&Shortcut> {
        self.entries.get(prefix.to_lowercase().as_str())
    }

    /// All prefixes, sorted
    pub fn prefixes(&self) -> Vec<&'static str> {
        let mut prefixes: Vec<_> = self.entries.keys().copied().collect();
        prefixes.sort_unstable();
        prefixes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ShortcutTable {
    fn default() -> Self {
        Self::builtin()
    }
}
