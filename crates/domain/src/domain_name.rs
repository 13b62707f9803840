/// Canonical lookup form of a query name: ASCII lower case, no trailing dot.
pub fn normalize_domain(name: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    name.to_ascii_lowercase()
}

/// The name with its leftmost label removed, or `None` for a single label.
pub fn parent_domain(hostname: &str) -> Option<&str> {
    hostname.split_once('.').map(|(_, parent)| parent)
}

/// Walks a normalized hostname from the full name up to its topmost label.
///
/// `a.b.com` yields `a.b.com`, `b.com`, `com`. The empty string is never
/// yielded; an empty input yields nothing.
#[derive(Debug, Clone)]
pub struct SuffixScanner<'a> {
    remaining: Option<&'a str>,
}

impl<'a> SuffixScanner<'a> {
    pub fn new(hostname: &'a str) -> Self {
        Self {
            remaining: (!hostname.is_empty()).then_some(hostname),
        }
    }
}

impl<'a> Iterator for SuffixScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.remaining?;
        self.remaining = parent_domain(current).filter(|parent| !parent.is_empty());
        Some(current)
    }
}

impl std::iter::FusedIterator for SuffixScanner<'_> {}
