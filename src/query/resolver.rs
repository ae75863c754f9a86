//! Classification of raw input into query plans

use super::{Command, CommandVerb, DirectModeIndicator, QueryPlan};
use crate::engines::{
    encode_query, with_default_scheme, EngineRegistry, Shortcut, ShortcutTable, QUERY_PLACEHOLDER,
};
use crate::selection::SelectionState;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Optional http(s) scheme, dotted host with a 2-6 letter final label,
/// optional path-like suffix and trailing slash. Case folding is ASCII-only
/// so `ſ` or the Kelvin sign never match `s` or `k`.
static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^(https?://)?([0-9a-z.\-]+)\.([a-z.]{2,6})([/0-9a-z_.\-]*)*/?$")
        .expect("bare URL pattern is valid")
});

/// Whether trimmed input looks like a URL to open directly
pub fn is_bare_url(input: &str) -> bool {
    BARE_URL.is_match(input.trim())
}

/// Classify raw input.
///
/// The checks run in strict priority order: slash command, bare URL,
/// shortcut with at least two tokens, then a search on the selected engine.
/// Callers must not submit empty input.
pub fn classify(
    raw: &str,
    selection: &SelectionState,
    registry: &EngineRegistry,
    shortcuts: &ShortcutTable,
) -> QueryPlan {
    let query = raw.trim();

    let plan = if query.starts_with('/') {
        QueryPlan::Command(parse_command(query))
    } else if let Some(url) = direct_url(query) {
        QueryPlan::DirectUrl { url }
    } else if let Some(url) = shortcut_url(query, shortcuts) {
        QueryPlan::Shortcut { url }
    } else {
        QueryPlan::EngineSearch {
            url: engine_search_url(query, selection, registry),
        }
    };

    debug!("Classified {:?} as {:?}", query, plan);
    plan
}

/// Cheap re-classification for the live direct mode indicator.
///
/// Commands never show the indicator.
pub fn preview_mode(raw: &str, shortcuts: &ShortcutTable) -> Option<DirectModeIndicator> {
    let query = raw.trim();
    if query.starts_with('/') {
        return None;
    }
    if BARE_URL.is_match(query) {
        return Some(DirectModeIndicator::Url);
    }
    match_shortcut(query, shortcuts).map(|(shortcut, _)| DirectModeIndicator::Shortcut {
        display_name: shortcut.display_name,
    })
}

/// Split `/verb param...` on whitespace. A lone `/` yields an empty unknown verb.
fn parse_command(query: &str) -> Command {
    let mut tokens = query.split_whitespace();
    let verb = tokens
        .next()
        .map(|first| first.trim_start_matches('/'))
        .unwrap_or_default();

    Command {
        verb: CommandVerb::parse(verb),
        params: tokens.map(str::to_string).collect(),
    }
}

fn direct_url(query: &str) -> Option<String> {
    if !BARE_URL.is_match(query) {
        return None;
    }
    Some(with_default_scheme(query).into_owned())
}

/// Find the shortcut named by the first token, returning it with the
/// remainder of the input. Needs more than one whitespace-separated token.
fn match_shortcut<'a, 'q>(
    query: &'q str,
    shortcuts: &'a ShortcutTable,
) -> Option<(&'a Shortcut, &'q str)> {
    let mut tokens = query.split_whitespace();
    let prefix = tokens.next()?;
    tokens.next()?;

    let shortcut = shortcuts.get(prefix)?;
    let remainder = query[prefix.len()..].trim();
    Some((shortcut, remainder))
}

fn shortcut_url(query: &str, shortcuts: &ShortcutTable) -> Option<String> {
    match_shortcut(query, shortcuts)
        .map(|(shortcut, remainder)| format!("{}{}", shortcut.url_prefix, encode_query(remainder)))
}

fn engine_search_url(query: &str, selection: &SelectionState, registry: &EngineRegistry) -> String {
    let encoded = encode_query(query);
    let url = match registry.find_by_name(&selection.selected_engine_name) {
        Some(engine) if engine.is_template() => engine.url.replace(QUERY_PLACEHOLDER, &encoded),
        _ => format!("{}{}", selection.selected_engine_url, encoded),
    };
    // Custom templates may be stored without a scheme
    with_default_scheme(&url).into_owned()
}
