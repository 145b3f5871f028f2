//! Structural checks on the entry sequence and last-sibling tracking.

use super::{Entry, RenderError};

/// Rejects sequences that do not follow the pre-order depth contract.
///
/// The first entry must be at depth 1, no entry may be at depth 0, and depth
/// can increase by at most one between consecutive entries (it may drop by
/// any amount).
pub fn validate_sequence(entries: &[Entry]) -> Result<(), RenderError> {
    let mut previous: Option<usize> = None;

    for (index, entry) in entries.iter().enumerate() {
        if entry.depth == 0 {
            return Err(RenderError::ZeroDepth { index });
        }
        if entry.name.is_empty() {
            return Err(RenderError::EmptyName { index });
        }

        match previous {
            None if entry.depth != 1 => {
                return Err(RenderError::InvalidFirstDepth { depth: entry.depth });
            }
            Some(prev) if entry.depth > prev + 1 => {
                return Err(RenderError::DepthJump {
                    index,
                    previous: prev,
                    depth: entry.depth,
                });
            }
            _ => {}
        }

        previous = Some(entry.depth);
    }

    Ok(())
}

/// Returns `true` if the entry at `index` is the last among its siblings.
///
/// Scans forward from `index + 1`: deeper entries are descendants and are
/// skipped, an entry at the same depth is a later sibling, and a shallower
/// entry (or the end of the sequence) closes the sibling run.
///
/// This is O(n) per call. Use [`last_sibling_flags`] to get every flag in a
/// single pass.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn is_last_sibling(entries: &[Entry], index: usize) -> bool {
    let depth = entries[index].depth;

    for next in &entries[index + 1..] {
        if next.depth < depth {
            return true;
        }
        if next.depth == depth {
            return false;
        }
    }

    true
}

/// Computes the last-sibling flag for every entry in one backward pass.
///
/// While walking from the end, `seen[d]` records whether an entry at depth
/// `d` has been passed since the last entry shallower than `d`. An entry is
/// last exactly when no such later sibling was seen. The result is identical
/// to calling [`is_last_sibling`] for each index.
pub fn last_sibling_flags(entries: &[Entry]) -> Vec<bool> {
    let mut flags = vec![false; entries.len()];
    let mut seen: Vec<bool> = Vec::new();

    for (index, entry) in entries.iter().enumerate().rev() {
        let depth = entry.depth;
        if seen.len() <= depth {
            seen.resize(depth + 1, false);
        }

        flags[index] = !seen[depth];
        seen[depth] = true;
        // Anything deeper belongs to a different parent once we move above
        // this entry.
        for deeper in seen.iter_mut().skip(depth + 1) {
            *deeper = false;
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(depths: &[usize]) -> Vec<Entry> {
        depths
            .iter()
            .enumerate()
            .map(|(i, &d)| Entry::file(format!("e{i}"), d, 0))
            .collect()
    }

    #[test]
    fn test_validate_accepts_well_formed_sequence() {
        assert!(validate_sequence(&seq(&[1, 2, 3, 3, 1, 2, 1])).is_ok());
        assert!(validate_sequence(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_first_depth() {
        assert_eq!(
            validate_sequence(&seq(&[2, 1])),
            Err(RenderError::InvalidFirstDepth { depth: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        assert_eq!(
            validate_sequence(&seq(&[1, 0])),
            Err(RenderError::ZeroDepth { index: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_depth_jump() {
        assert_eq!(
            validate_sequence(&seq(&[1, 2, 4])),
            Err(RenderError::DepthJump {
                index: 2,
                previous: 2,
                depth: 4
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let entries = vec![Entry::directory("a", 1), Entry::file("", 2, 1)];
        assert_eq!(
            validate_sequence(&entries),
            Err(RenderError::EmptyName { index: 1 })
        );
    }

    #[test]
    fn test_last_entry_is_always_last() {
        let entries = seq(&[1, 2, 3]);
        assert!(is_last_sibling(&entries, 2));
    }

    #[test]
    fn test_sibling_found_past_deep_descendants() {
        // a(1) > b(2) > c(3) > d(4), then e(1)
        let entries = seq(&[1, 2, 3, 4, 1]);
        assert!(!is_last_sibling(&entries, 0));
        assert!(is_last_sibling(&entries, 1));
        assert!(is_last_sibling(&entries, 2));
        assert!(is_last_sibling(&entries, 3));
        assert!(is_last_sibling(&entries, 4));
    }

    #[test]
    fn test_shallower_entry_closes_sibling_run() {
        // The second depth-2 run under a new parent must not count as a
        // sibling of the first.
        let entries = seq(&[1, 2, 1, 2]);
        assert!(is_last_sibling(&entries, 1));
        assert!(!is_last_sibling(&entries, 0));
    }

    #[test]
    fn test_backward_pass_matches_manual_trace() {
        let entries = seq(&[1, 2, 3, 3, 2, 3, 1, 2, 2]);
        let expected = vec![false, false, false, true, true, true, true, false, true];
        assert_eq!(last_sibling_flags(&entries), expected);

        let forward: Vec<bool> = (0..entries.len())
            .map(|i| is_last_sibling(&entries, i))
            .collect();
        assert_eq!(forward, expected);
    }
}
