//! Name comparison for gallery entries.
//!
//! File names carry sequence numbers ("IMG_9.jpg", "IMG_10.jpg"), so a
//! plain lexicographic compare shows 10 before 9. The comparator here
//! is case-insensitive and compares digit runs by numeric value.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Case-insensitive, numeric-aware ordering over names.
///
/// Digit runs compare by value ("img9" before "img10"); equal values
/// with different leading-zero padding fall back to run length so the
/// order stays total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(|c| c.to_lowercase()).peekable();
    let mut right = b.chars().flat_map(|c| c.to_lowercase()).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut left);
                    let run_b = take_digit_run(&mut right);
                    match compare_digit_runs(&run_a, &run_b) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            left.next();
                            right.next();
                        }
                        unequal => return unequal,
                    }
                }
            }
        }
    }
}

fn take_digit_run<I>(chars: &mut Peekable<I>) -> String
where
    I: Iterator<Item = char>,
{
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let significant_a = a.trim_start_matches('0');
    let significant_b = b.trim_start_matches('0');
    significant_a
        .len()
        .cmp(&significant_b.len())
        .then_with(|| significant_a.cmp(significant_b))
        .then_with(|| a.len().cmp(&b.len()))
}
