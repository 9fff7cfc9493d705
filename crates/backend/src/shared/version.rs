//! Dotted numeric version comparison for the core API compatibility check.

use std::cmp::Ordering;

/// Parse `1.2.3` into its numeric components. Missing trailing components
/// compare as zero; any non-numeric component makes the version invalid.
pub fn parse_version(raw: &str) -> Option<Vec<u64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.split('.').map(|part| part.parse::<u64>().ok()).collect()
}

pub fn compare_versions(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// True when `version` parses and is at least `minimum`
pub fn is_at_least(version: &str, minimum: &str) -> bool {
    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => compare_versions(&v, &m) != Ordering::Less,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.0.0"), Some(vec![1, 0, 0]));
        assert_eq!(parse_version(" 2.10 "), Some(vec![2, 10]));
        assert_eq!(parse_version("1.x"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn test_is_at_least() {
        assert!(is_at_least("1.0.0", "1.0.0"));
        assert!(is_at_least("1.0", "1.0.0"));
        assert!(is_at_least("1.10.0", "1.9.9"));
        assert!(!is_at_least("0.9.9", "1.0.0"));
        assert!(!is_at_least("garbage", "1.0.0"));
    }
}
