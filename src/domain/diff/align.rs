// src/domain/diff/align.rs
use std::cmp::Ordering;
use std::ops::Range;

/// Above this many table cells the middle section is reported as one gap.
const MAX_CELLS: usize = 4_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Chunk {
    Equal { old: usize, new: usize },
    Gap { old: Range<usize>, new: Range<usize> },
}

/// Longest-common-subsequence alignment of two token sequences.
///
/// When two moves keep the subsequence equally long, the smaller of the two
/// head tokens is consumed first. The rule does not depend on which side is
/// "old", so `align(b, a)` matches exactly the mirrored pairs of `align(a, b)`.
pub(crate) fn align<T: Ord>(old: &[T], new: &[T]) -> Vec<Chunk> {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let mut chunks = Vec::with_capacity(old.len().max(new.len()));
    chunks.extend((0..prefix).map(|i| Chunk::Equal { old: i, new: i }));

    let old_mid = prefix..old.len() - suffix;
    let new_mid = prefix..new.len() - suffix;
    align_middle(old, new, old_mid, new_mid, &mut chunks);

    let old_tail = old.len() - suffix;
    let new_tail = new.len() - suffix;
    chunks.extend((0..suffix).map(|k| Chunk::Equal {
        old: old_tail + k,
        new: new_tail + k,
    }));
    chunks
}

fn align_middle<T: Ord>(
    old: &[T],
    new: &[T],
    old_mid: Range<usize>,
    new_mid: Range<usize>,
    out: &mut Vec<Chunk>,
) {
    if old_mid.is_empty() && new_mid.is_empty() {
        return;
    }
    let a = &old[old_mid.clone()];
    let b = &new[new_mid.clone()];
    let cells = (a.len() + 1).saturating_mul(b.len() + 1);
    if a.is_empty() || b.is_empty() || cells > MAX_CELLS {
        out.push(Chunk::Gap {
            old: old_mid,
            new: new_mid,
        });
        return;
    }

    let width = b.len() + 1;
    // table[i * width + j] = LCS length of a[i..] and b[j..]
    let mut table = vec![0u32; cells];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i * width + j] = if a[i] == b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    let (mut gap_i, mut gap_j) = (0, 0);
    let flush = |out: &mut Vec<Chunk>, from: (usize, usize), to: (usize, usize)| {
        if from != to {
            out.push(Chunk::Gap {
                old: old_mid.start + from.0..old_mid.start + to.0,
                new: new_mid.start + from.1..new_mid.start + to.1,
            });
        }
    };

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            flush(out, (gap_i, gap_j), (i, j));
            out.push(Chunk::Equal {
                old: old_mid.start + i,
                new: new_mid.start + j,
            });
            i += 1;
            j += 1;
            gap_i = i;
            gap_j = j;
            continue;
        }

        let drop_old = table[(i + 1) * width + j];
        let drop_new = table[i * width + j + 1];
        match drop_old.cmp(&drop_new) {
            Ordering::Greater => i += 1,
            Ordering::Less => j += 1,
            Ordering::Equal => {
                if a[i] < b[j] {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }
    }
    flush(out, (gap_i, gap_j), (a.len(), b.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(chunks: &[Chunk]) -> Vec<(usize, usize)> {
        chunks
            .iter()
            .filter_map(|chunk| match chunk {
                Chunk::Equal { old, new } => Some((*old, *new)),
                Chunk::Gap { .. } => None,
            })
            .collect()
    }

    #[test]
    fn identical_sequences_are_all_equal() {
        let chunks = align(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(matched(&chunks), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn insertion_in_the_middle_is_a_single_gap() {
        let chunks = align(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(
            chunks,
            vec![
                Chunk::Equal { old: 0, new: 0 },
                Chunk::Gap { old: 1..1, new: 1..2 },
                Chunk::Equal { old: 1, new: 2 },
            ]
        );
    }

    #[test]
    fn ambiguous_alignment_is_mirror_symmetric() {
        let a = ["x", "a", "y", "b"];
        let b = ["a", "x", "b", "y"];
        let forward = matched(&align(&a, &b));
        let backward: Vec<(usize, usize)> = matched(&align(&b, &a))
            .into_iter()
            .map(|(old, new)| (new, old))
            .collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 2);
    }

    #[test]
    fn empty_side_yields_one_gap() {
        let chunks = align::<&str>(&[], &["a", "b"]);
        assert_eq!(chunks, vec![Chunk::Gap { old: 0..0, new: 0..2 }]);
    }
}
