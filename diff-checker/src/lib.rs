//! Checks systems of difference constraints `x_i - x_j = c` for consistency.
//!
//! Input is `t` test cases, each `n m` followed by `m` triples `i j c`.
//! One `YES`/`NO` line is written per test case.

mod error;

use std::io::{BufRead, Write};

use proconio::{input, source::once::OnceSource};
use union_find::WeightedUnionFind;

pub use error::CheckerError;

/// Whether all `constraints` over elements `1..=n` hold at once.
///
/// Constraints after the first contradiction are not applied.
pub fn check(n: usize, constraints: &[(usize, usize, i64)]) -> bool {
    let mut uf = WeightedUnionFind::new(n + 1);
    constraints.iter().all(|&(i, j, c)| uf.unite(i, j, c))
}

pub fn run<R: BufRead, W: Write>(
    source: &mut OnceSource<R>,
    out: &mut W,
) -> Result<(), CheckerError> {
    input! {
        from &mut *source,
        t: usize,
    }
    for case in 1..=t {
        // all m triples are read even when an early one already contradicts
        input! {
            from &mut *source,
            n: usize,
            m: usize,
            constraints: [(usize, usize, i64); m],
        }
        if let Some(element) = constraints
            .iter()
            .flat_map(|&(i, j, _)| [i, j])
            .find(|&e| e == 0 || e > n)
        {
            // earlier verdicts stay visible even though the run fails
            out.flush()?;
            return Err(CheckerError::ElementOutOfRange {
                case,
                element,
                len: n,
            });
        }
        let verdict = if check(n, &constraints) { "YES" } else { "NO" };
        writeln!(out, "{verdict}")?;
    }
    out.flush()?;
    Ok(())
}
