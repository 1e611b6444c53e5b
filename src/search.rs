//! Exact pattern search built on the Z-array.
//!
//! The pattern and text are viewed as one probe sequence
//! `pattern + SENTINEL + text`. Wherever the Z-value inside the text
//! region equals the pattern length, a full occurrence starts there; the
//! sentinel stops a match from spilling across the pattern/text boundary.

use crate::zarray::{Symbols, z_range};
use anyhow::{Result, bail};

/// Separator between pattern and text in the probe sequence.
///
/// NUL does not occur in valid text; inputs that do contain it are
/// rejected rather than risking false matches across the boundary.
pub const SENTINEL: u8 = 0x00;

/// Logical concatenation `pattern + SENTINEL + text`.
///
/// Accessed through index translation instead of copying both inputs into
/// a fresh buffer, which matters when the text is large.
struct Probe<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
}

impl Symbols for Probe<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.pattern.len() + 1 + self.text.len()
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        let m = self.pattern.len();
        if index < m {
            self.pattern[index]
        } else if index == m {
            SENTINEL
        } else {
            self.text[index - m - 1]
        }
    }
}

/// Find every starting offset in `text` where `pattern` occurs.
///
/// Offsets come back in ascending order. An empty pattern yields no
/// matches, as does a pattern longer than the text. Inputs containing the
/// [`SENTINEL`] byte are rejected.
///
/// Runs in O(n + m): one Z-array pass over the probe sequence, restricted
/// to the entries a match can actually use.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    if memchr::memchr(SENTINEL, pattern).is_some() {
        bail!("pattern contains the reserved sentinel byte 0x00");
    }
    if memchr::memchr(SENTINEL, text).is_some() {
        bail!("text contains the reserved sentinel byte 0x00");
    }

    let m = pattern.len();
    let n = text.len();
    if m == 0 || m > n {
        return Ok(Vec::new());
    }

    let probe = Probe { pattern, text };
    let text_start = m + 1;
    // Past this index fewer than `m` symbols remain, so no match fits.
    let last_usable = probe.len() - m;
    // Mirror references during the text scan stay below both the pattern
    // length and the usable text span, so only this prefix is needed.
    let pattern_entries = m.min(n - m + 1);

    let mut zs = vec![0; last_usable + 1];
    z_range(&probe, &mut zs, 0, pattern_entries);
    z_range(&probe, &mut zs, text_start, last_usable + 1);

    let mut matches = Vec::new();
    for (offset, &z) in zs[text_start..=last_usable].iter().enumerate() {
        if z == m {
            matches.push(offset);
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slide the pattern across the text and compare byte for byte.
    fn brute_force(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }
        text.windows(pattern.len())
            .enumerate()
            .filter(|(_, window)| *window == pattern)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_overlapping_matches() {
        let matches = find_all(b"123412341234", b"12341234").unwrap();
        assert_eq!(matches, vec![0, 4]);
    }

    #[test]
    fn test_periodic_text() {
        // The pattern matches offsets 0 and 4 of every 13-byte repetition.
        let text: Vec<u8> = b"012301230123-".repeat(50);
        let matches = find_all(&text, b"01230123").unwrap();

        assert_eq!(matches.len(), 100);
        for k in 0..50 {
            assert!(matches.contains(&(k * 13)));
            assert!(matches.contains(&(k * 13 + 4)));
        }
    }

    #[test]
    fn test_single_byte_pattern() {
        let text = [b'*'; 20];
        let matches = find_all(&text, b"*").unwrap();
        assert_eq!(matches, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert!(find_all(b"abc", b"").unwrap().is_empty());
        assert!(find_all(b"", b"").unwrap().is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(find_all(b"ab", b"abc").unwrap().is_empty());
        assert!(find_all(b"", b"a").unwrap().is_empty());
    }

    #[test]
    fn test_pattern_equals_text() {
        assert_eq!(find_all(b"needle", b"needle").unwrap(), vec![0]);
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(find_all(b"xxneedle", b"needle").unwrap(), vec![2]);
    }

    #[test]
    fn test_no_match() {
        assert!(find_all(b"abcdefgh", b"xyz").unwrap().is_empty());
    }

    #[test]
    fn test_sentinel_rejected() {
        assert!(find_all(b"a\0b", b"a").is_err());
        assert!(find_all(b"ab", b"\0").is_err());
    }

    #[test]
    fn test_ascending_order() {
        let matches = find_all(b"abaabaabaab", b"ab").unwrap();
        assert!(matches.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_matches_brute_force() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"abracadabra", b"abra"),
            (b"aaaaaaaaaa", b"aaa"),
            (b"mississippi", b"issi"),
            (b"abcabcabcabd", b"abcabd"),
            (b"banana", b"ana"),
            (b"0120120120", b"012012"),
        ];
        for (text, pattern) in cases {
            assert_eq!(
                find_all(text, pattern).unwrap(),
                brute_force(text, pattern),
                "text {:?} pattern {:?}",
                text,
                pattern
            );
        }
    }
}
