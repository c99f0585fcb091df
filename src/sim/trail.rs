use std::collections::VecDeque;

use super::units::Vector;

/// Past positions of a body, oldest first.
///
/// Unbounded unless a capacity is given, in which case the oldest points are
/// dropped once the capacity is reached.
#[derive(Clone, Debug, Default)]
pub(crate) struct Trail {
    points: VecDeque<Vector>,
    capacity: Option<usize>,
}

impl Trail {
    pub(crate) fn with_capacity(capacity: Option<usize>) -> Trail {
        Trail {
            points: VecDeque::new(),
            capacity: capacity.filter(|c| *c > 0),
        }
    }

    pub(crate) fn record(&mut self, position: Vector) {
        if let Some(capacity) = self.capacity {
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(position);
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_trail_keeps_every_point_in_order() {
        let mut trail = Trail::default();
        for i in 0..1_000 {
            trail.record([i as f64, -(i as f64)]);
        }

        assert_eq!(trail.len(), 1_000);
        for (i, point) in trail.points().enumerate() {
            assert_eq!(*point, [i as f64, -(i as f64)]);
        }
    }

    #[test]
    fn repeated_positions_are_not_deduplicated() {
        let mut trail = Trail::default();
        trail.record([1., 1.]);
        trail.record([1., 1.]);

        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn bounded_trail_evicts_oldest_first() {
        let mut trail = Trail::with_capacity(Some(3));
        for i in 0..5 {
            trail.record([i as f64, 0.]);
        }

        let points: Vec<_> = trail.points().copied().collect();
        assert_eq!(points, vec![[2., 0.], [3., 0.], [4., 0.]]);
        assert_eq!(trail.points().last(), Some(&[4., 0.]));
    }

    #[test]
    fn zero_capacity_means_unbounded() {
        let mut trail = Trail::with_capacity(Some(0));
        for i in 0..10 {
            trail.record([i as f64, 0.]);
        }

        assert_eq!(trail.len(), 10);
    }

    #[test]
    fn new_trail_is_empty() {
        let trail = Trail::default();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.points().next(), None);
    }
}
