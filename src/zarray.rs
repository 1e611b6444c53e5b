//! Z-array construction.
//!
//! The Z-array of a sequence stores, for each position, the length of the
//! longest substring starting there that matches a prefix of the whole
//! sequence. `z_array(b"aabaa")` is `[5, 1, 0, 2, 1]`.
//!
//! Construction runs in O(n) using the Z-box technique: every maximal match
//! discovered so far ("box") lets later positions inherit comparisons that
//! were already paid for, so each symbol comparison either ends in a
//! mismatch or pushes the explored frontier strictly right.

/// Indexable sequence of atomic symbols.
///
/// The construction only ever looks symbols up by position, so this seam
/// lets it run over a plain byte slice as well as over logical views that
/// are never materialized (see [`crate::search`]).
pub trait Symbols {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> u8;
}

impl Symbols for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self[index]
    }
}

/// Compute the full Z-array of `s`.
///
/// `z_array(s)[0]` is always `s.len()`; for `i > 0` the entry is the length
/// of the longest common prefix of `s` and `s[i..]`.
pub fn z_array(s: &[u8]) -> Vec<usize> {
    z_array_prefix(s, s.len())
}

/// Compute the first `count` entries of the Z-array of `s`.
///
/// A `count` larger than `s.len()` is clamped to it. The scan is left to
/// right, so the result is identical to the same-length prefix of the full
/// array.
pub fn z_array_prefix(s: &[u8], count: usize) -> Vec<usize> {
    let count = count.min(s.len());
    let mut zs = vec![0; count];
    z_range(s, &mut zs, 0, count);
    zs
}

/// Fill `zs[start..end)` with Z-values of `s`.
///
/// `end` is clamped to both the sequence length and the buffer length.
/// When `start > 0`, every entry left of `start` that the requested range
/// can reach as a mirror reference must already be present in `zs`; the
/// searcher relies on this to skip positions where a full match cannot
/// fit.
pub(crate) fn z_range<S: Symbols + ?Sized>(s: &S, zs: &mut [usize], start: usize, end: usize) {
    let end = end.min(s.len()).min(zs.len());
    if end <= start {
        return;
    }

    // `best` is the start of the box reaching furthest right so far and
    // `unexplored` the first position no box covers. `best` is only read
    // once `unexplored` has moved past the current index, which also means
    // it has been assigned.
    let mut unexplored = start;
    let mut best = start;

    if start == 0 {
        // The whole sequence trivially matches itself.
        zs[0] = s.len();
        unexplored = 1;
    }

    for i in unexplored..end {
        if i >= unexplored {
            // Fresh territory: compare against the prefix from scratch.
            let len = match_length(s, i, 0);
            zs[i] = len;
            if len > 0 {
                best = i;
                unexplored = i + len;
            }
        } else {
            // Inside the box starting at `best`: `s[i..unexplored)` is
            // already known to equal `s[mirror..mirror + remaining)`.
            let remaining = unexplored - i;
            let mirror = i - best;

            if zs[mirror] < remaining {
                // The mirrored match ends strictly inside the box, so the
                // box boundary cannot extend it.
                zs[i] = zs[mirror];
            } else if zs[mirror] > remaining {
                // The match cannot outrun the box: the symbol just past the
                // box already failed to match the prefix.
                zs[i] = remaining;
            } else {
                // The mirrored match reaches exactly the box boundary;
                // symbols beyond it are unexplored and may keep matching.
                let len = match_length(s, i, remaining);
                zs[i] = len;
                best = i;
                unexplored = i + len;
            }
        }
    }
}

/// Length of the longest common prefix of `s` and `s[start..]`.
///
/// The first `known` symbols are assumed to match and are skipped; the
/// caller guarantees them through an enclosing Z-box.
fn match_length<S: Symbols + ?Sized>(s: &S, start: usize, known: usize) -> usize {
    let max = s.len() - start;
    let mut len = known;
    while len < max && s.get(len) == s.get(start + len) {
        len += 1;
    }
    len
}
