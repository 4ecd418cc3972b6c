//! Ordering of physical index suffixes.
//!
//! Suffixes look like `2017.10.03.21` but are not guaranteed to be
//! zero-padded, so plain string comparison would put `.9` after `.21`.
//! [`cmp_index_suffix`] defines a total order instead:
//!
//! 1. Split both suffixes on `.` into tokens. A token is numeric when it is a
//!    non-empty run of ASCII digits and textual otherwise.
//! 2. Compare the token sequences pairwise:
//!    - two numeric tokens compare by value (leading zeros ignored, no
//!      overflow for long runs);
//!    - two textual tokens compare lexically (byte order);
//!    - a numeric token sorts before a textual one.
//! 3. If one sequence is a prefix of the other, the shorter one sorts first.
//! 4. If everything compared equal but the strings differ (`03` vs `3`), the
//!    whole suffixes are compared lexically so distinct strings never tie.
//!
//! Each step is a lexicographic comparison over a totally ordered token type,
//! so the order is transitive and the latest index does not depend on the
//! order the catalog lists names in.

use std::cmp::Ordering;

/// One `.`-separated component of a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixToken<'a> {
    Numeric(&'a str),
    Text(&'a str),
}

impl<'a> SuffixToken<'a> {
    fn parse(component: &'a str) -> Self {
        if !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()) {
            SuffixToken::Numeric(component)
        } else {
            SuffixToken::Text(component)
        }
    }
}

impl Ord for SuffixToken<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SuffixToken::Numeric(a), SuffixToken::Numeric(b)) => cmp_numeric(a, b),
            (SuffixToken::Text(a), SuffixToken::Text(b)) => a.cmp(b),
            (SuffixToken::Numeric(_), SuffixToken::Text(_)) => Ordering::Less,
            (SuffixToken::Text(_), SuffixToken::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SuffixToken<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two runs of ASCII digits by numeric value.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two index suffixes under the token order described in the
/// module docs.
pub fn cmp_index_suffix(a: &str, b: &str) -> Ordering {
    cmp_tokens(a, b).then_with(|| a.cmp(b))
}

fn cmp_tokens(a: &str, b: &str) -> Ordering {
    // `split_terminator` yields no token for an empty suffix.
    let mut tokens_a = a.split_terminator('.').map(SuffixToken::parse);
    let mut tokens_b = b.split_terminator('.').map(SuffixToken::parse);

    loop {
        match (tokens_a.next(), tokens_b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ta), Some(tb)) => match ta.cmp(&tb) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_components_compare_by_value() {
        assert_eq!(
            cmp_index_suffix("2017.10.03.9", "2017.10.03.21"),
            Ordering::Less
        );
        assert_eq!(
            cmp_index_suffix("2017.10.03.21", "2017.10.03.9"),
            Ordering::Greater
        );
        assert_eq!(cmp_index_suffix("2017.9.30", "2017.10.01"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(cmp_tokens("2017.10.03", "2017.10.3"), Ordering::Equal);
        // Distinct spellings still get a deterministic order.
        assert_eq!(cmp_index_suffix("2017.10.03", "2017.10.3"), Ordering::Less);
        assert_eq!(cmp_index_suffix("2017.10.3", "2017.10.03"), Ordering::Greater);
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        let big = "99999999999999999999999999";
        let bigger = "100000000000000000000000000";
        assert_eq!(cmp_index_suffix(big, bigger), Ordering::Less);
    }

    #[test]
    fn shorter_suffix_with_equal_prefix_sorts_first() {
        assert_eq!(cmp_index_suffix("2017.10.03", "2017.10.03.21"), Ordering::Less);
        assert_eq!(cmp_index_suffix("2017.10.03.0", "2017.10.03"), Ordering::Greater);
    }

    #[test]
    fn textual_tokens_compare_lexically_and_after_numbers() {
        assert_eq!(cmp_index_suffix("2017.10.b", "2017.10.a"), Ordering::Greater);
        assert_eq!(cmp_index_suffix("2017.10.9x", "2017.10.10x"), Ordering::Greater);
        assert_eq!(cmp_index_suffix("2017.10.rc", "2017.10.03"), Ordering::Greater);
        assert_eq!(cmp_index_suffix("2017.10.9", "2017.10.10a"), Ordering::Less);
    }

    #[test]
    fn order_is_transitive_across_mixed_tokens() {
        let triples = [
            ("9", "10", "10a"),
            ("2017.10.9", "2017.10.10", "2017.10.10-rc"),
            ("1.a", "1.b", "2"),
            ("3", "03.x", "3.y"),
        ];
        for (a, b, c) in triples {
            let ab = cmp_index_suffix(a, b);
            let bc = cmp_index_suffix(b, c);
            let ac = cmp_index_suffix(a, c);
            assert_eq!(ab, Ordering::Less, "{a} vs {b}");
            assert_eq!(bc, Ordering::Less, "{b} vs {c}");
            assert_eq!(ac, Ordering::Less, "{a} vs {c}");
        }
    }

    #[test]
    fn order_is_antisymmetric() {
        let samples = [
            "", "9", "10", "10a", "2017.10.03", "2017.10.3", "2017.10.03.21", "2017.10.rc", "x",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(cmp_index_suffix(a, b), cmp_index_suffix(b, a).reverse());
            }
        }
    }

    #[test]
    fn identical_suffixes_are_equal() {
        assert_eq!(
            cmp_index_suffix("2017.10.03.21", "2017.10.03.21"),
            Ordering::Equal
        );
        assert_eq!(cmp_index_suffix("", ""), Ordering::Equal);
    }

    #[test]
    fn sorting_is_deterministic_for_mixed_inputs() {
        let mut v = vec![
            "2017.10.03.21",
            "2017.10.03.9",
            "2017.10.03",
            "2017.10.03.09",
            "2017.10.03.alpha",
            "2016.12.31.23",
        ];
        v.sort_by(|a, b| cmp_index_suffix(a, b));
        assert_eq!(
            v,
            vec![
                "2016.12.31.23",
                "2017.10.03",
                "2017.10.03.09",
                "2017.10.03.9",
                "2017.10.03.21",
                "2017.10.03.alpha",
            ]
        );
    }
}
