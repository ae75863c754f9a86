//! Built-in engines

use super::types::Engine;

/// Preset engines in menu order: (name, url prefix, domain)
pub const PRESET_ENGINES: &[(&str, &str, &str)] = &[
    ("Bing", "https://www.bing.com/search?q=", "bing.com"),
    ("Google", "https://www.google.com/search?q=", "google.com"),
    ("Baidu", "https://www.baidu.com/s?wd=", "baidu.com"),
];

pub fn preset_engines() -> Vec<Engine> {
    PRESET_ENGINES
        .iter()
        .map(|(name, url, domain)| Engine::new(*name, *url, *domain))
        .collect()
}
