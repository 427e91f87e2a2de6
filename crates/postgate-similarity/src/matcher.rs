//! Ratcliff–Obershelp block matching over characters.

use rustc_hash::FxHashMap;

use crate::normalize::normalize;

/// Positions of each character in `b`, ascending.
fn index_positions(b: &[char]) -> FxHashMap<char, Vec<usize>> {
    let mut b2j: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (j, c) in b.iter().enumerate() {
        b2j.entry(*c).or_default().push(j);
    }
    b2j
}

/// Row buffers for [`longest_match`], reused across rows and calls.
#[derive(Default)]
struct RowScratch {
    /// `prev[j]` = length of the match ending at `a[i-1]`, `b[j]`.
    prev: FxHashMap<usize, usize>,
    next: FxHashMap<usize, usize>,
}

/// Longest block shared by `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among equally long blocks the one starting
/// earliest in `a`, then earliest in `b`, wins.
fn longest_match(
    a: &[char],
    b2j: &FxHashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
    scratch: &mut RowScratch,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
    scratch.prev.clear();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        scratch.next.clear();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > 0 {
                    scratch.prev.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                scratch.next.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        std::mem::swap(&mut scratch.prev, &mut scratch.next);
    }

    (best_i, best_j, best_size)
}

/// Total characters covered by the recursive matching blocks of `a` and `b`.
pub fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let b2j = index_positions(b);
    let mut scratch = RowScratch::default();
    let mut total = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];

    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, k) = longest_match(a, &b2j, (alo, ahi), (blo, bhi), &mut scratch);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            pending.push(((i + k, ahi), (j + k, bhi)));
        }
    }

    total
}

/// Ratio for two already-normalized strings.
///
/// The pair is aligned in a canonical order so the result does not depend
/// on argument order. Two empty strings are identical (1.0).
pub fn similarity_normalized(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    let total_len = first.len() + second.len();
    if total_len == 0 {
        return 1.0;
    }
    let matched = matching_chars(&first, &second);
    (2 * matched) as f64 / total_len as f64
}

/// Similarity ratio in `[0, 1]` between two raw texts.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_normalized(&normalize(a), &normalize(b))
}

/// Upper bound on `similarity_normalized` from character multisets alone.
pub(crate) fn upper_bound(a: &[char], b: &[char]) -> f64 {
    let total_len = a.len() + b.len();
    if total_len == 0 {
        return 1.0;
    }
    let mut avail: FxHashMap<char, usize> = FxHashMap::default();
    for c in b {
        *avail.entry(*c).or_insert(0) += 1;
    }
    let mut shared = 0;
    for c in a {
        if let Some(n) = avail.get_mut(c) {
            if *n > 0 {
                *n -= 1;
                shared += 1;
            }
        }
    }
    (2 * shared) as f64 / total_len as f64
}
