use std::borrow::Cow;

// Trailing segment that captures the remainder of a path.
const WILDCARD: &str = ":path*";

// A single source -> destination rewrite. Either side may end in `:path*`.
#[derive(Debug, Clone, Copy)]
pub struct RewriteRule {
    pub source: &'static str,
    pub destination: &'static str,
}

impl RewriteRule {
    pub const fn new(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
        }
    }

    // Returns the rewritten path when this rule matches.
    fn apply(&self, path: &str) -> Option<String> {
        match self.source.strip_suffix(WILDCARD) {
            Some(prefix) => {
                // Prefix keeps its trailing '/', so the match is segment-aligned.
                let rest = path.strip_prefix(prefix)?;
                if rest.is_empty() {
                    return None;
                }
                let target = self.destination.strip_suffix(WILDCARD)?;
                Some(format!("{target}{rest}"))
            }
            None => (path == self.source).then(|| self.destination.to_string()),
        }
    }
}

// English external paths mapped onto the Portuguese page paths.
pub const LOCALIZED_ROUTES: &[RewriteRule] = &[
    RewriteRule::new("/login", "/entrar"),
    RewriteRule::new("/register", "/cadastro"),
    RewriteRule::new("/register/:path*", "/cadastro/:path*"),
    RewriteRule::new("/forgot-password", "/esqueci-senha"),
    RewriteRule::new("/reset-password", "/resetar-senha"),
];

// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone, Copy)]
pub struct RewriteTable {
    rules: &'static [RewriteRule],
}

impl RewriteTable {
    pub const fn new(rules: &'static [RewriteRule]) -> Self {
        Self { rules }
    }

    pub const fn localized() -> Self {
        Self::new(LOCALIZED_ROUTES)
    }

    // Unmatched paths are returned unchanged.
    pub fn resolve<'a>(&self, path: &'a str) -> Cow<'a, str> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(path))
            .map_or(Cow::Borrowed(path), Cow::Owned)
    }
}

impl Default for RewriteTable {
    fn default() -> Self {
        Self::localized()
    }
}
