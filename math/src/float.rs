pub trait Float: Sized {
    /// Computes `x / y` if y is nonzero; returns `None` if y is zero.
    fn try_divide(self, divisor: Self) -> Option<Self>;
}

impl Float for f32 {
    /// Computes `x / y` if y is nonzero; returns `None` if y is zero.
    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.0f32.try_divide(0.0), None);
    /// assert_eq!(1.0f32.try_divide(2.5), Some(0.4));
    /// assert_eq!(0.0f32.try_divide(0.0), None);
    /// assert_eq!(0.0f32.try_divide(2.5), Some(0.0));
    /// ```
    fn try_divide(self, divisor: Self) -> Option<Self> {
        if divisor == 0.0 {
            None
        } else {
            Some(self / divisor)
        }
    }
}

pub trait Inside
where
    Self: std::cmp::PartialOrd + Sized + Copy,
{
    fn inside(self, interval: (Self, Self)) -> bool {
        let (left, right) = interval;
        left <= self && self <= right
    }
}

impl Inside for f32 {}
