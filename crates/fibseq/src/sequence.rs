use alloc::vec::Vec;
use num_bigint::BigUint;

use crate::{log, Error, Result};

/// The largest number of leading terms that [`fib_u64`] can return.
///
/// Term 93 is `12200160415121876738`; term 94 exceeds [`u64::MAX`].
pub const MAX_U64_TERMS: usize = 94;

/// Compute the first `n` terms of the Fibonacci sequence.
///
/// The sequence starts `0, 1` and every later term is the sum of the two
/// before it. Terms are arbitrary precision, so this never overflows.
///
/// Returns [`Error::NegativeCount`] for negative `n`, and
/// [`Error::CountTooLarge`] when storage for `n` terms cannot be reserved.
pub fn fib(n: i64) -> Result<Vec<BigUint>> {
    let count = term_count(n)?;

    let mut terms = Vec::new();
    terms.try_reserve_exact(count).map_err(|_| {
        log::debug!("cannot reserve storage for {} terms", count);
        Error::CountTooLarge(n)
    })?;

    Ok(accumulate(terms, count))
}

/// Compute the first `n` terms of the Fibonacci sequence.
///
/// Version of [`fib`] for callers that already hold a `usize`.
///
/// # Panics
///
/// Panics if storage for `n` terms cannot be allocated. Use [`fib`] to get
/// [`Error::CountTooLarge`] instead.
pub fn first_n(n: usize) -> Vec<BigUint> {
    accumulate(Vec::with_capacity(n), n)
}

// `terms` must be empty with room for `n` elements.
fn accumulate(mut terms: Vec<BigUint>, n: usize) -> Vec<BigUint> {
    match n {
        0 => return terms,
        1 => {
            terms.push(BigUint::from(0u32));
            return terms;
        }
        _ => {}
    }

    terms.push(BigUint::from(0u32));
    terms.push(BigUint::from(1u32));

    for i in 2..n {
        let next = &terms[i - 2] + &terms[i - 1];
        terms.push(next);
    }

    log::debug!("computed {} terms, last term has {} bits", n, terms[n - 1].bits());
    terms
}

/// Compute the first `n` terms of the Fibonacci sequence as `u64`s.
///
/// Fails with [`Error::Overflow`] carrying the index of the first term that
/// does not fit, i.e. for any `n` above [`MAX_U64_TERMS`].
pub fn fib_u64(n: i64) -> Result<Vec<u64>> {
    let n = term_count(n)?;
    let mut terms: Vec<u64> = Vec::with_capacity(n.min(MAX_U64_TERMS));

    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => terms[i - 2].checked_add(terms[i - 1]).ok_or(Error::Overflow { index: i })?,
        };
        terms.push(term);
    }

    log::debug!("computed {} u64 terms", n);
    Ok(terms)
}

fn term_count(n: i64) -> Result<usize> {
    if n < 0 {
        log::trace!("rejecting negative term count {}", n);
        return Err(Error::NegativeCount(n));
    }
    usize::try_from(n).map_err(|_| Error::CountTooLarge(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn base_cases() -> Result<()> {
        assert!(fib(0)?.is_empty());
        assert_eq!(fib(1)?, big(&[0]));
        assert_eq!(fib(2)?, big(&[0, 1]));
        Ok(())
    }

    #[test]
    fn leading_terms() -> Result<()> {
        assert_eq!(fib(5)?, big(&[0, 1, 1, 2, 3]));
        assert_eq!(fib(10)?, big(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
        Ok(())
    }

    #[test]
    fn negative_count_is_rejected() {
        assert_eq!(fib(-1), Err(Error::NegativeCount(-1)));
        assert_eq!(fib(i64::MIN), Err(Error::NegativeCount(i64::MIN)));
        assert_eq!(fib_u64(-7), Err(Error::NegativeCount(-7)));
    }

    #[test]
    fn oversized_count_is_rejected() {
        assert_eq!(fib(i64::MAX), Err(Error::CountTooLarge(i64::MAX)));
        assert_eq!(fib(i64::MAX / 2), Err(Error::CountTooLarge(i64::MAX / 2)));
    }

    #[test]
    fn length_matches_request() {
        for n in 0..64 {
            assert_eq!(first_n(n).len(), n);
        }
    }

    #[test]
    fn u64_terms_stop_at_overflow() -> Result<()> {
        let terms = fib_u64(MAX_U64_TERMS as i64)?;
        assert_eq!(terms.len(), MAX_U64_TERMS);
        assert_eq!(terms[MAX_U64_TERMS - 1], 12_200_160_415_121_876_738);

        assert_eq!(fib_u64(MAX_U64_TERMS as i64 + 1), Err(Error::Overflow { index: MAX_U64_TERMS }));
        assert_eq!(fib_u64(i64::MAX), Err(Error::Overflow { index: MAX_U64_TERMS }));
        Ok(())
    }
}
