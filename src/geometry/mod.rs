use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point<T> {

    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another point
    pub fn distance(&self, other: &Point<T>) -> T {
        euclidean(self.x, self.y, other.x, other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn coords(&self) -> [T; 2] {
        [self.x, self.y]
    }
}
