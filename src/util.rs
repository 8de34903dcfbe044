//! Private utility module
use std::collections::HashSet;

/// Check whether the given order leaves every axis in place.
pub fn is_identity(order: &[usize]) -> bool {
    order.iter().enumerate().all(|(i, &o)| i == o)
}

/// Check whether `order` is a bijection on `0..n`.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &o in order {
        if o >= n || seen[o] {
            return false;
        }
        seen[o] = true;
    }
    true
}

/// Rearrange `items` so that position `k` holds `items[order[k]]`.
///
/// `order` must be a valid permutation of the items' indices.
pub fn permute<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&o| items[o].clone()).collect()
}

/// Find the first repeated element, if any.
pub fn find_duplicate<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}
