use std::{cmp::Ordering, ops::AddAssign};

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product with another vector of the same dimension.
    /// Walks both index lists once, merging on equal indices.
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let mut a = self.raw_iter().peekable();
        let mut b = other.raw_iter().peekable();

        while let (Some(&(ia, va)), Some(&(ib, vb))) = (a.peek(), b.peek()) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result += (*va).into() * (*vb).into();
                    a.next();
                    b.next();
                }
                Ordering::Less => {
                    a.next();
                }
                Ordering::Greater => {
                    b.next();
                }
            }
        }
        result
    }

    /// Squared euclidean norm
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for (_, val) in self.raw_iter() {
            let v: R = (*val).into();
            result += v * v;
        }
        result
    }
}
