use geospat_core::Coordinate;
use geospat_geometry::Point;

/// Trait for k-means centroid computation via incremental aggregation.
///
/// The "absorb" pattern generalizes mean computation: samples are folded one
/// at a time into an accumulator, and the centroid is read off at the end.
///
/// # Invariant
///
/// After absorbing N samples into the empty accumulator (`Default`), it
/// describes the arithmetic mean of those samples.
pub trait Absorb<T = Self> {
    /// Combines this accumulator with another sample.
    fn absorb(self, other: &T) -> Self;
}

/// Running coordinate sums of a cluster's members.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Centroid {
    x: Coordinate,
    y: Coordinate,
    n: usize,
}

impl Centroid {
    /// Number of points absorbed.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Arithmetic mean of the absorbed points, or `None` for an empty cluster.
    pub fn mean(&self) -> Option<Point> {
        match self.n {
            0 => None,
            n => Some(Point::new(self.x / n as Coordinate, self.y / n as Coordinate)),
        }
    }
}

impl Absorb<Point> for Centroid {
    fn absorb(self, point: &Point) -> Self {
        Self {
            x: self.x + point.x(),
            y: self.y + point.y(),
            n: self.n + 1,
        }
    }
}

impl From<&Point> for Centroid {
    fn from(point: &Point) -> Self {
        Self::default().absorb(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_mean() {
        assert_eq!(Centroid::default().mean(), None);
        assert_eq!(Centroid::default().n(), 0);
    }

    #[test]
    fn mean_of_square() {
        let corners = [(0., 0.), (2., 0.), (2., 4.), (0., 4.)].map(Point::from);
        let c = corners.iter().fold(Centroid::default(), Centroid::absorb);
        assert_eq!(c.n(), 4);
        assert_eq!(c.mean(), Some(Point::new(1., 2.)));
    }

    #[test]
    fn singleton_is_itself() {
        let p = Point::new(-3.5, 7.25);
        assert_eq!(Centroid::from(&p).mean(), Some(p));
        assert_eq!(Centroid::from(&p).n(), 1);
    }
}
