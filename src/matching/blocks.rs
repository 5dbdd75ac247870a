//! Matching-block search over token sequences.
//!
//! Finds the set of maximal non-overlapping matching blocks between two
//! sequences, greedily from largest to smallest, preserving relative order —
//! the diff/patience family of block matching. Ties break toward the
//! earliest occurrence in `a`, then in `b`.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A maximal contiguous run of identical tokens present in both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    /// Start index of the run in `a`.
    pub a_start: usize,
    /// Start index of the run in `b`.
    pub b_start: usize,
    /// Run length in tokens. Always > 0.
    pub len: usize,
}

/// Compute all maximal matching blocks between `a` and `b`.
///
/// Blocks are returned sorted by position in `a` and are monotonically
/// increasing in both sequences (relative order is preserved). Adjacent
/// blocks are merged; no zero-length entries are emitted.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchBlock> {
    // Index of each token's positions in `b`, in increasing order.
    let mut b_index: FxHashMap<&T, Vec<usize>> = FxHashMap::default();
    for (j, tok) in b.iter().enumerate() {
        b_index.entry(tok).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let Some(block) = longest_match(a, &b_index, alo, ahi, blo, bhi) else {
            continue;
        };
        // Recurse into the regions before and after the block; this keeps
        // the final block set non-overlapping and order-preserving.
        if alo < block.a_start && blo < block.b_start {
            queue.push((alo, block.a_start, blo, block.b_start));
        }
        if block.a_start + block.len < ahi && block.b_start + block.len < bhi {
            queue.push((block.a_start + block.len, ahi, block.b_start + block.len, bhi));
        }
        blocks.push(block);
    }

    blocks.sort_unstable_by_key(|m| (m.a_start, m.b_start));

    // Merge blocks that ended up adjacent in both sequences.
    let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(prev)
                if prev.a_start + prev.len == block.a_start
                    && prev.b_start + prev.len == block.b_start =>
            {
                prev.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged
}

/// Find the longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long blocks the one starting earliest in `a` wins, and
/// among those the one starting earliest in `b`.
fn longest_match<T: Eq + Hash>(
    a: &[T],
    b_index: &FxHashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Option<MatchBlock> {
    let mut best: Option<MatchBlock> = None;
    // run_ends[j] = length of the matching run ending at a[i], b[j].
    let mut run_ends: FxHashMap<usize, usize> = FxHashMap::default();

    for i in alo..ahi {
        let mut next_run_ends = FxHashMap::default();
        if let Some(positions) = b_index.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j > blo {
                    run_ends.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_run_ends.insert(j, len);
                // Strict comparison keeps the earliest maximal run.
                if best.is_none_or(|b| len > b.len) {
                    best = Some(MatchBlock {
                        a_start: i + 1 - len,
                        b_start: j + 1 - len,
                        len,
                    });
                }
            }
        }
        run_ends = next_run_ends;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_identical_sequences_single_block() {
        let a = words("the quick brown fox");
        let blocks = matching_blocks(&a, &a);
        assert_eq!(
            blocks,
            vec![MatchBlock {
                a_start: 0,
                b_start: 0,
                len: 4
            }]
        );
    }

    #[test]
    fn test_no_overlap() {
        let a = words("alpha beta gamma");
        let b = words("delta epsilon zeta");
        assert!(matching_blocks(&a, &b).is_empty());
    }

    #[test]
    fn test_shared_run_with_different_context() {
        let a = words("yesterday the quick brown fox jumps over something else");
        let b = words("the quick brown fox jumps over the lazy dog today");
        let blocks = matching_blocks(&a, &b);
        let longest = blocks.iter().max_by_key(|m| m.len).unwrap();
        assert_eq!(longest.a_start, 1);
        assert_eq!(longest.b_start, 0);
        assert_eq!(longest.len, 6);
    }

    #[test]
    fn test_blocks_preserve_relative_order() {
        let a = words("one two x three four");
        let b = words("one two y three four");
        let blocks = matching_blocks(&a, &b);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].a_start < blocks[1].a_start);
        assert!(blocks[0].b_start < blocks[1].b_start);
        assert_eq!(blocks[0].len, 2);
        assert_eq!(blocks[1].len, 2);
    }

    #[test]
    fn test_adjacent_blocks_merged() {
        // A single contiguous run must come back as one block, not pieces.
        let a = words("a b c d e");
        let b = words("a b c d e f");
        let blocks = matching_blocks(&a, &b);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len, 5);
    }

    #[test]
    fn test_empty_inputs() {
        let a = words("something");
        let empty: Vec<&str> = Vec::new();
        assert!(matching_blocks(&a, &empty).is_empty());
        assert!(matching_blocks(&empty, &a).is_empty());
        assert!(matching_blocks(&empty, &empty).is_empty());
    }

    #[test]
    fn test_repeated_tokens() {
        let a = words("the cat and the dog");
        let b = words("the dog and the cat");
        let blocks = matching_blocks(&a, &b);
        // Order preservation caps what can match; total matched tokens
        // must never exceed either sequence length.
        let total: usize = blocks.iter().map(|m| m.len).sum();
        assert!(total <= 5);
        assert!(!blocks.is_empty());
    }
}
