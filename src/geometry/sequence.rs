//! Ordered, index-addressable vertex storage.
//!
//! Backed by a fixed-capacity `heapless::Vec` so polygons never touch an
//! allocator. Index mistakes never panic: reads out of range return
//! `None` and writes out of range do nothing. Only growth past
//! [`MAX_VERTICES`] is reported, as [`Error::BufferOverflow`].

use crate::config::MAX_VERTICES;
use crate::error::Error;
use crate::geometry::Point;
use heapless::Vec;

/// Owning, resizable sequence of points.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PointSequence {
    points: Vec<Point, MAX_VERTICES>,
}

impl PointSequence {
    /// Empty sequence.
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Copy `points` into a new sequence.
    pub fn from_slice(points: &[Point]) -> Result<Self, Error> {
        let points = Vec::from_slice(points).map_err(|_| {
            warn!("PointSequence: {} points exceed capacity", points.len());
            Error::BufferOverflow
        })?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of points the sequence can hold.
    pub const fn capacity(&self) -> usize {
        MAX_VERTICES
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Resize to exactly `len` points. The first `min(len, old_len)`
    /// points are kept; new slots are `(0, 0)`.
    pub fn resize(&mut self, len: usize) -> Result<(), Error> {
        self.points.resize(len, Point::ZERO).map_err(|_| {
            warn!("PointSequence: resize to {} exceeds capacity", len);
            Error::BufferOverflow
        })
    }

    /// Append a point.
    pub fn push_back(&mut self, point: Point) -> Result<(), Error> {
        self.points.push(point).map_err(|_| {
            warn!("PointSequence: push exceeds capacity");
            Error::BufferOverflow
        })
    }

    /// Insert `point` at `pos`, shifting later points right.
    ///
    /// `pos == len` appends. `pos > len` does nothing.
    pub fn insert(&mut self, pos: usize, point: Point) -> Result<(), Error> {
        if pos > self.points.len() {
            return Ok(());
        }
        self.points.insert(pos, point).map_err(|_| {
            warn!("PointSequence: insert exceeds capacity");
            Error::BufferOverflow
        })
    }

    /// Remove the point at `pos`, shifting later points left.
    /// Does nothing when `pos` is out of range.
    pub fn remove(&mut self, pos: usize) {
        if pos < self.points.len() {
            self.points.remove(pos);
        }
    }

    /// Replace the point at `pos`. Does nothing when `pos` is out of range.
    pub fn set_point(&mut self, pos: usize, point: Point) {
        if let Some(slot) = self.points.get_mut(pos) {
            *slot = point;
        }
    }

    pub fn get(&self, pos: usize) -> Option<&Point> {
        self.points.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Point> {
        self.points.get_mut(pos)
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Every edge of the closed outline: consecutive pairs followed by
    /// the closing pair `(last, first)`.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.points)
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Iterator over the edges of a closed vertex loop.
///
/// A single vertex yields one zero-length edge; no vertices yield nothing.
pub struct Edges<'a> {
    points: &'a [Point],
    index: usize,
}

impl<'a> Edges<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self { points, index: 0 }
    }
}

impl Iterator for Edges<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let from = *self.points.get(self.index)?;
        let to = match self.points.get(self.index + 1) {
            Some(p) => *p,
            None => self.points[0],
        };
        self.index += 1;
        Some((from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.points.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(coords: &[(i32, i32)]) -> PointSequence {
        let mut s = PointSequence::new();
        for &c in coords {
            s.push_back(c.into()).unwrap();
        }
        s
    }

    #[test]
    fn new_sequence_is_empty() {
        let s = PointSequence::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.get(0).is_none());
    }

    #[test]
    fn push_back_appends_in_order() {
        let s = seq(&[(1, 2), (3, 4)]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(0), Some(&Point::new(1, 2)));
        assert_eq!(s.get(1), Some(&Point::new(3, 4)));
    }

    #[test]
    fn resize_grows_with_zero_points() {
        let mut s = seq(&[(5, 5)]);
        s.resize(3).unwrap();
        assert_eq!(s.as_slice(), &[Point::new(5, 5), Point::ZERO, Point::ZERO]);
    }

    #[test]
    fn resize_shrinks_keeping_prefix() {
        let mut s = seq(&[(1, 1), (2, 2), (3, 3)]);
        s.resize(1).unwrap();
        assert_eq!(s.as_slice(), &[Point::new(1, 1)]);
    }

    #[test]
    fn resize_past_capacity_fails_and_keeps_contents() {
        let mut s = seq(&[(1, 1)]);
        assert_eq!(s.resize(MAX_VERTICES + 1), Err(Error::BufferOverflow));
        assert_eq!(s.as_slice(), &[Point::new(1, 1)]);
    }

    #[test]
    fn insert_shifts_right() {
        let mut s = seq(&[(1, 1), (3, 3)]);
        s.insert(1, Point::new(2, 2)).unwrap();
        assert_eq!(
            s.as_slice(),
            &[Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn insert_at_len_appends() {
        let mut s = seq(&[(1, 1)]);
        s.insert(1, Point::new(9, 9)).unwrap();
        assert_eq!(s.get(1), Some(&Point::new(9, 9)));
    }

    #[test]
    fn insert_past_len_is_noop() {
        let mut s = seq(&[(1, 1)]);
        s.insert(5, Point::new(9, 9)).unwrap();
        assert_eq!(s.as_slice(), &[Point::new(1, 1)]);
    }

    #[test]
    fn remove_shifts_left() {
        let mut s = seq(&[(1, 1), (2, 2), (3, 3)]);
        s.remove(0);
        assert_eq!(s.as_slice(), &[Point::new(2, 2), Point::new(3, 3)]);
    }

    #[test]
    fn remove_last_element() {
        let mut s = seq(&[(1, 1), (2, 2), (3, 3)]);
        s.remove(2);
        assert_eq!(s.as_slice(), &[Point::new(1, 1), Point::new(2, 2)]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut s = seq(&[(1, 1), (2, 2)]);
        let before = s.clone();
        s.remove(2);
        s.remove(usize::MAX);
        assert_eq!(s, before);
    }

    #[test]
    fn set_point_out_of_range_is_noop() {
        let mut s = seq(&[(1, 1)]);
        s.set_point(3, Point::new(7, 7));
        assert_eq!(s.as_slice(), &[Point::new(1, 1)]);
        s.set_point(0, Point::new(7, 7));
        assert_eq!(s.as_slice(), &[Point::new(7, 7)]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut s = seq(&[(1, 1)]);
        if let Some(p) = s.get_mut(0) {
            *p = p.offset(1, 2);
        }
        assert_eq!(s.get(0), Some(&Point::new(2, 3)));
        assert!(s.get_mut(1).is_none());
    }

    #[test]
    fn clear_empties() {
        let mut s = seq(&[(1, 1), (2, 2)]);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn push_past_capacity_fails() {
        let mut s = PointSequence::new();
        for i in 0..MAX_VERTICES {
            s.push_back(Point::new(i as i32, 0)).unwrap();
        }
        assert_eq!(s.push_back(Point::ZERO), Err(Error::BufferOverflow));
        assert_eq!(s.insert(0, Point::ZERO), Err(Error::BufferOverflow));
        assert_eq!(s.len(), MAX_VERTICES);
    }

    #[test]
    fn from_slice_rejects_oversized_input() {
        let too_many = [Point::ZERO; MAX_VERTICES + 1];
        assert_eq!(
            PointSequence::from_slice(&too_many),
            Err(Error::BufferOverflow)
        );
    }

    #[test]
    fn edges_close_the_loop() {
        let s = seq(&[(0, 0), (4, 0), (4, 4)]);
        let edges: heapless::Vec<(Point, Point), 4> = s.edges().collect();
        assert_eq!(
            edges.as_slice(),
            &[
                (Point::new(0, 0), Point::new(4, 0)),
                (Point::new(4, 0), Point::new(4, 4)),
                (Point::new(4, 4), Point::new(0, 0)),
            ]
        );
    }

    #[test]
    fn edges_of_degenerate_sequences() {
        assert_eq!(PointSequence::new().edges().count(), 0);
        let single = seq(&[(3, 3)]);
        let mut edges = single.edges();
        assert_eq!(edges.next(), Some((Point::new(3, 3), Point::new(3, 3))));
        assert_eq!(edges.next(), None);
    }
}
