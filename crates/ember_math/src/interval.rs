/// A closed range of ray parameters `[min, max]`.
///
/// Intersection routines accept a root only when it lies strictly inside,
/// see [`Interval::surrounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Contains nothing.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Contains everything.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Same lower bound, new upper bound.
    #[inline]
    pub fn with_max(&self, max: f32) -> Self {
        Self::new(self.min, max)
    }

    /// Returns true if `min <= x <= max`.
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if `min < x < max`.
    #[inline]
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
