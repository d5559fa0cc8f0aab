//! Coverage pass for generators that must mention every member of a domain.
//!
//! A generator first samples rows freely, then asks which members of the
//! required domain (every cleaner, every homeowner) never showed up as a row's
//! subject and synthesizes one extra row for each of them. Both steps are
//! independent of how the candidate rows were produced.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// Members of `required` that are not the subject of any candidate row, in
/// domain order.
///
/// `subject` extracts the covered key of a row; rows it returns `None` for
/// cover nothing.
pub fn uncovered<'a, T, Q, R, S>(required: &'a [T], candidates: &[R], subject: S) -> Vec<&'a T>
where
    T: Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: Fn(&R) -> Option<&Q>,
{
    let touched: HashSet<&Q> = candidates.iter().filter_map(&subject).collect();

    required
        .iter()
        .filter(|item| {
            let key: &Q = <T as Borrow<Q>>::borrow(*item);
            !touched.contains(&key)
        })
        .collect()
}

/// Supplementary rows: one per uncovered domain member, built by `synthesize`.
pub fn fill<T, Q, R, S, F>(required: &[T], candidates: &[R], subject: S, synthesize: F) -> Vec<R>
where
    T: Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: Fn(&R) -> Option<&Q>,
    F: FnMut(&T) -> R,
{
    uncovered(required, candidates, subject)
        .into_iter()
        .map(synthesize)
        .collect()
}
