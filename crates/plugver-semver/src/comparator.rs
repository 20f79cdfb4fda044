//! Number-aware string comparison used to order pre-release tags

use std::cmp::Ordering;

/// Total order over arbitrary strings that treats embedded digit runs as
/// numbers ("natural sort").
///
/// `"test2"` sorts before `"test10"`, and `"test01"` ties with `"test1"`.
/// A digit always sorts before a non-digit, non-digits compare by ASCII
/// ordinal, and when one string runs out first the shorter one sorts first.
pub struct NumberAwareComparator;

impl NumberAwareComparator {
    /// Compare two strings, digit runs numerically, everything else by
    /// ASCII ordinal. Pure function, no side effects.
    pub fn compare(left: &str, right: &str) -> Ordering {
        let a = left.as_bytes();
        let b = right.as_bytes();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            let ca = a[i];
            let cb = b[j];

            if ca.is_ascii_digit() && cb.is_ascii_digit() {
                let end_a = digit_run_end(a, i);
                let end_b = digit_run_end(b, j);
                match compare_digit_runs(&a[i..end_a], &b[j..end_b]) {
                    Ordering::Equal => {
                        i = end_a;
                        j = end_b;
                    }
                    decided => return decided,
                }
            } else if ca.is_ascii_digit() {
                // Digits sort before letters and symbols
                return Ordering::Less;
            } else if cb.is_ascii_digit() {
                return Ordering::Greater;
            } else {
                match ca.cmp(&cb) {
                    Ordering::Equal => {
                        i += 1;
                        j += 1;
                    }
                    decided => return decided,
                }
            }
        }

        (a.len() - i).cmp(&(b.len() - j))
    }
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two digit runs as integers of arbitrary length. Leading zeros
/// are ignored, so the runs are never parsed into a machine word.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let first = run.iter().position(|&d| d != b'0').unwrap_or(run.len());
    &run[first..]
}
