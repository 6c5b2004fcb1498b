//! Shared-item intersection of two rating rows.
//!
//! Rows are sorted maps, so the intersection is a merge-join in
//! O(|a| + |b|) without allocating.

use std::cmp::Ordering;
use std::collections::btree_map;
use std::iter::Peekable;

use kindred_core::Ratings;

/// Iterator over `(rating_a, rating_b)` for every item present in both rows.
pub struct SharedRatings<'a> {
    a: Peekable<btree_map::Iter<'a, String, f64>>,
    b: Peekable<btree_map::Iter<'a, String, f64>>,
}

impl Iterator for SharedRatings<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (ka, _) = self.a.peek()?;
            let (kb, _) = self.b.peek()?;
            match ka.cmp(kb) {
                Ordering::Less => {
                    self.a.next();
                }
                Ordering::Greater => {
                    self.b.next();
                }
                Ordering::Equal => {
                    let (_, ra) = self.a.next()?;
                    let (_, rb) = self.b.next()?;
                    return Some((*ra, *rb));
                }
            }
        }
    }
}

/// Pair up the ratings of every item both rows contain.
pub fn shared_ratings<'a>(a: &'a Ratings, b: &'a Ratings) -> SharedRatings<'a> {
    SharedRatings {
        a: a.iter().peekable(),
        b: b.iter().peekable(),
    }
}

/// Running sums over the shared items of two rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SharedStats {
    pub n: usize,
    pub sum_a: f64,
    pub sum_b: f64,
    pub sum_sq_a: f64,
    pub sum_sq_b: f64,
    pub sum_prod: f64,
    pub sum_sq_diff: f64,
}

impl SharedStats {
    pub fn collect(a: &Ratings, b: &Ratings) -> Self {
        shared_ratings(a, b).fold(Self::default(), |mut s, (x, y)| {
            s.n += 1;
            s.sum_a += x;
            s.sum_b += y;
            s.sum_sq_a += x * x;
            s.sum_sq_b += y * y;
            s.sum_prod += x * y;
            s.sum_sq_diff += (x - y) * (x - y);
            s
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, f64)]) -> Ratings {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn yields_only_common_items() {
        let a = row(&[("a", 1.0), ("c", 3.0), ("e", 5.0)]);
        let b = row(&[("b", 2.0), ("c", 4.0), ("d", 1.0), ("e", 2.0)]);
        let pairs: Vec<(f64, f64)> = shared_ratings(&a, &b).collect();
        assert_eq!(pairs, vec![(3.0, 4.0), (5.0, 2.0)]);
    }

    #[test]
    fn disjoint_rows_share_nothing() {
        let a = row(&[("a", 1.0)]);
        let b = row(&[("b", 1.0)]);
        assert_eq!(shared_ratings(&a, &b).count(), 0);
        assert_eq!(SharedStats::collect(&a, &b).n, 0);
    }

    #[test]
    fn stats_accumulate_over_shared_items() {
        let a = row(&[("x", 1.0), ("y", 2.0)]);
        let b = row(&[("x", 3.0), ("y", 5.0), ("z", 9.0)]);
        let s = SharedStats::collect(&a, &b);
        assert_eq!(s.n, 2);
        assert_eq!(s.sum_a, 3.0);
        assert_eq!(s.sum_b, 8.0);
        assert_eq!(s.sum_prod, 13.0);
        assert_eq!(s.sum_sq_diff, 13.0);
    }
}
