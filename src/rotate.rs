//! Dynamic-IP replacement logic
//!
//! A rule's source address list is expected to contain the configured
//! static entries plus exactly one other entry, the dynamic IP. Extraction
//! is strict: zero or several distinct non-static entries is an error, not
//! an arbitrary pick.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RotateError {
    #[error("no non-static entry found in the source address list")]
    DynamicIpMissing,
    #[error("multiple non-static entries found in the source address list: {0:?}")]
    DynamicIpAmbiguous(Vec<String>),
}

/// Find the one entry of `current` that is not in `static_ips`.
///
/// Duplicate occurrences of the same value count as a single candidate.
pub fn extract_dynamic_ip<'a>(
    current: &'a [String],
    static_ips: &[String],
) -> Result<&'a str, RotateError> {
    let mut candidates: Vec<&str> = current
        .iter()
        .map(String::as_str)
        .filter(|ip| !static_ips.iter().any(|s| s == ip))
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    match candidates.as_slice() {
        [] => Err(RotateError::DynamicIpMissing),
        &[ip] => Ok(ip),
        many => Err(RotateError::DynamicIpAmbiguous(
            many.iter().map(|s| s.to_string()).collect(),
        )),
    }
}

/// Replace every occurrence of `old_ip` with `new_ip`, keeping all other
/// entries, their order and their multiplicity.
pub fn replace_ip(current: &[String], old_ip: &str, new_ip: &str) -> Vec<String> {
    current
        .iter()
        .map(|ip| {
            if ip == old_ip {
                new_ip.to_string()
            } else {
                ip.clone()
            }
        })
        .collect()
}

/// Compute the rotated source address list.
///
/// Idempotent: when the single non-static entry already equals `new_ip`
/// the result is identical to the input, so a second run with the same
/// configuration changes nothing.
pub fn rotate_prefixes(
    current: &[String],
    static_ips: &[String],
    new_ip: &str,
) -> Result<Vec<String>, RotateError> {
    let old_ip = extract_dynamic_ip(current, static_ips)?;
    Ok(replace_ip(current, old_ip, new_ip))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ips(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replaces_the_one_dynamic_entry() {
        let current = ips(&["10.0.0.1/32", "10.0.0.2/32", "203.0.113.5/32"]);
        let statics = ips(&["10.0.0.1/32", "10.0.0.2/32"]);

        let rotated = rotate_prefixes(&current, &statics, "198.51.100.9/32").unwrap();
        assert_eq!(
            rotated,
            ips(&["10.0.0.1/32", "10.0.0.2/32", "198.51.100.9/32"])
        );
    }

    #[test]
    fn test_preserves_order_and_multiplicity() {
        // Dynamic entry in the middle, one static entry duplicated
        let current = ips(&["10.0.0.1/32", "203.0.113.5/32", "10.0.0.1/32", "10.0.0.2/32"]);
        let statics = ips(&["10.0.0.1/32", "10.0.0.2/32"]);

        let rotated = rotate_prefixes(&current, &statics, "198.51.100.9/32").unwrap();
        assert_eq!(
            rotated,
            ips(&["10.0.0.1/32", "198.51.100.9/32", "10.0.0.1/32", "10.0.0.2/32"])
        );
    }

    #[test]
    fn test_replaces_every_occurrence_of_the_dynamic_entry() {
        let current = ips(&["203.0.113.5/32", "10.0.0.1/32", "203.0.113.5/32"]);
        let statics = ips(&["10.0.0.1/32"]);

        // Duplicates of one value are a single candidate, not an ambiguity
        let rotated = rotate_prefixes(&current, &statics, "198.51.100.9/32").unwrap();
        assert_eq!(
            rotated,
            ips(&["198.51.100.9/32", "10.0.0.1/32", "198.51.100.9/32"])
        );
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let current = ips(&["10.0.0.1/32", "10.0.0.2/32", "203.0.113.5/32"]);
        let statics = ips(&["10.0.0.1/32", "10.0.0.2/32"]);

        let first = rotate_prefixes(&current, &statics, "198.51.100.9/32").unwrap();
        // The old dynamic IP is gone now; the new one must be found and kept
        let second = rotate_prefixes(&first, &statics, "198.51.100.9/32").unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_missing_dynamic_entry_is_an_error() {
        // Only static entries present (e.g. duplicate static configuration)
        let current = ips(&["10.0.0.1/32", "10.0.0.2/32"]);
        let statics = ips(&["10.0.0.1/32", "10.0.0.2/32"]);

        assert_eq!(
            extract_dynamic_ip(&current, &statics),
            Err(RotateError::DynamicIpMissing)
        );
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let statics = ips(&["10.0.0.1/32"]);
        assert_eq!(
            extract_dynamic_ip(&[], &statics),
            Err(RotateError::DynamicIpMissing)
        );
    }

    #[test]
    fn test_ambiguous_dynamic_entries_are_an_error() {
        let current = ips(&["10.0.0.1/32", "203.0.113.5/32", "198.51.100.7/32"]);
        let statics = ips(&["10.0.0.1/32"]);

        match extract_dynamic_ip(&current, &statics) {
            Err(RotateError::DynamicIpAmbiguous(candidates)) => {
                assert_eq!(candidates.len(), 2);
                assert!(candidates.contains(&"203.0.113.5/32".to_string()));
                assert!(candidates.contains(&"198.51.100.7/32".to_string()));
            }
            other => panic!("expected ambiguity error, got {:?}", other),
        }
    }
}
