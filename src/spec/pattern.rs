//! Wildcard name matching and spec lookup.

use super::{BlockSpec, PropertySpec};

/// A spec entry addressable by a (possibly wildcard) name pattern.
pub(crate) trait Named {
    fn pattern(&self) -> &str;
}

impl Named for PropertySpec {
    fn pattern(&self) -> &str {
        &self.name
    }
}

impl Named for BlockSpec {
    fn pattern(&self) -> &str {
        &self.name
    }
}

/// Anchored match of `name` against `pattern`, where every `*` matches any
/// (possibly empty) run of characters and everything else is literal.
pub(crate) fn matches(pattern: &str, name: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = name.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it is currently
    // assumed to have consumed up to.
    let mut star: Option<(usize, usize)> = None;

    while t < txt.len() {
        if p < pat.len() && pat[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if p < pat.len() && pat[p] == txt[t] {
            p += 1;
            t += 1;
        } else if let Some((sp, st)) = star {
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    pat[p..].iter().all(|&c| c == '*')
}

/// Finds the spec governing `name`.
///
/// When several patterns match, the lexicographically greatest pattern
/// string wins; among identical patterns the first one declared wins.
pub(crate) fn find<'s, T: Named>(specs: &'s [T], name: &str) -> Option<&'s T> {
    specs
        .iter()
        .filter(|s| matches(s.pattern(), name))
        .fold(None, |best: Option<&'s T>, s| match best {
            Some(b) if s.pattern() <= b.pattern() => Some(b),
            _ => Some(s),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ValueType;

    #[test]
    fn test_literal_patterns() {
        assert!(matches("foo", "foo"));
        assert!(!matches("foo", "foobar"));
        assert!(!matches("foo", "fo"));
        assert!(matches("", ""));
    }

    #[test]
    fn test_suffix_wildcard() {
        assert!(matches("foo.*", "foo.bar"));
        assert!(matches("foo.*", "foo.bar.baz"));
        assert!(!matches("foo.*", "foo"));
        assert!(!matches("foo.*", "foobar"));
    }

    #[test]
    fn test_catch_all() {
        assert!(matches("*", "anything"));
        assert!(matches("*", ""));
    }

    #[test]
    fn test_inner_and_multiple_wildcards() {
        assert!(matches("a*c", "abc"));
        assert!(matches("a*c", "ac"));
        assert!(matches("a*c", "abcbc"));
        assert!(!matches("a*c", "abcb"));
        assert!(matches("*.*.x", "a.b.x"));
        assert!(!matches("*.*.x", "a.x"));
    }

    #[test]
    fn test_dots_are_literal() {
        assert!(!matches("foo.bar", "fooxbar"));
    }

    #[test]
    fn test_find_prefers_greatest_pattern() {
        let specs = vec![
            PropertySpec::new("foo", ValueType::Int),
            PropertySpec::new("foo.*", ValueType::Bool),
            PropertySpec::new("foo.bar*", ValueType::String),
        ];

        assert_eq!(find(&specs, "foo").unwrap().ty, ValueType::Int);
        assert_eq!(find(&specs, "foo.baz").unwrap().ty, ValueType::Bool);
        // "foo.bar*" > "foo.*" because 'b' > '*'.
        assert_eq!(find(&specs, "foo.bar.baz").unwrap().ty, ValueType::String);
        assert!(find(&specs, "bar").is_none());
    }

    #[test]
    fn test_find_block_falls_back_to_catch_all() {
        let specs = vec![BlockSpec::new("*").repeat(), BlockSpec::new("named")];
        assert_eq!(find(&specs, "named").unwrap().name, "named");
        assert_eq!(find(&specs, "other").unwrap().name, "*");
    }

    #[test]
    fn test_find_keeps_first_of_identical_patterns() {
        let specs = vec![
            PropertySpec::new("x", ValueType::Int),
            PropertySpec::new("x", ValueType::Bool),
        ];
        assert_eq!(find(&specs, "x").unwrap().ty, ValueType::Int);
    }
}
