/// Static help shown by `/help`
pub const HELP_TEXT: &str = "\
Custom search engines
  /add <name> <url template> [domain]  Add or update a search engine
  /remove <name>                       Remove a custom search engine
  /list                                List custom search engines
  /help                                Show this help

Use {query} in the URL template as the placeholder for your search.
Example: /add GitHub https://github.com/search?q={query}";

#[cfg(test)]
mod tests {
    use super::HELP_TEXT;

    #[test]
    fn test_help_mentions_every_verb() {
        for verb in ["/add", "/remove", "/list", "/help"] {
            assert!(HELP_TEXT.contains(verb), "missing {}", verb);
        }
    }
}
