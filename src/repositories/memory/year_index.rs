// src/repositories/memory/year_index.rs
//
// Year-major secondary index.
//
// Each bucket holds the ids of one release year, kept in the same
// (title, year) order as the primary sequence, so a year query is a map
// lookup plus a copy of the bucket.

use std::collections::BTreeMap;

use crate::domain::MovieId;

#[derive(Debug, Default, Clone)]
pub(crate) struct YearIndex {
    buckets: BTreeMap<i32, Vec<MovieId>>,
}

impl YearIndex {
    /// Inserts `id` before the first entry that does not sort before it.
    /// `sorts_before(other)` must answer whether `other` < the new movie.
    pub(crate) fn insert<F>(&mut self, year: i32, id: MovieId, sorts_before: F)
    where
        F: Fn(MovieId) -> bool,
    {
        let bucket = self.buckets.entry(year).or_default();
        let position = bucket.partition_point(|other| sorts_before(*other));
        bucket.insert(position, id);
    }

    pub(crate) fn remove(&mut self, year: i32, id: MovieId) {
        if let Some(bucket) = self.buckets.get_mut(&year) {
            bucket.retain(|other| *other != id);
            if bucket.is_empty() {
                self.buckets.remove(&year);
            }
        }
    }

    pub(crate) fn get(&self, year: i32) -> &[MovieId] {
        self.buckets.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_follow_given_order() {
        let mut index = YearIndex::default();
        // Order by id for the test
        index.insert(2000, MovieId(5), |other| other < MovieId(5));
        index.insert(2000, MovieId(2), |other| other < MovieId(2));
        index.insert(2000, MovieId(9), |other| other < MovieId(9));
        index.insert(2001, MovieId(1), |other| other < MovieId(1));

        assert_eq!(index.get(2000), &[MovieId(2), MovieId(5), MovieId(9)]);
        assert_eq!(index.get(2001), &[MovieId(1)]);
        assert!(index.get(1999).is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_remove_drops_empty_buckets() {
        let mut index = YearIndex::default();
        index.insert(2000, MovieId(1), |_| false);
        index.remove(2000, MovieId(1));
        index.remove(1990, MovieId(1));
        assert!(index.get(2000).is_empty());
        assert_eq!(index.len(), 0);
    }
}
