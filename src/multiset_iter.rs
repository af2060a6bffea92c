
use core::ops::{Add, Sub};

use crate::common::*;

/// Enumerates every multiset of size `L` drawn from `[min, max)`
///
/// Repetition is allowed, but two tuples holding the same values in a different order count
/// as the same multiset, so only one of them is produced.  The representative is always the
/// non-increasing arrangement, e.g. `[2, 1]` rather than `[1, 2]`.  A range of `r` values
/// yields `C(r + L - 1, L)` multisets.
///
/// ## Algorithm Details
///
/// Same counter as [CombinationIter](crate::CombinationIter), with one extra rule: after a digit
/// steps down, its right neighbor is clamped so that its own next step lands no higher than
/// the new value.  Every subsequent tuple is therefore non-increasing from left to right.
///
/// Order is reverse lexicographic among non-increasing tuples.
/// ```txt
/// L = 2, [1, 4):  [3, 3], [3, 2], [3, 1], [2, 2], [2, 1], [1, 1]
/// ```
///
/// On completion the buffer is reset to all `max`.
///
pub struct MultisetIter<'a, T> {
    odometer: Odometer<'a, T>,
}

impl<'a, T> MultisetIter<'a, T>
    where
    T: Copy + PartialOrd + num_traits::One + Add<Output=T> + Sub<Output=T>,
{
    /// Returns [EnumerationError::EmptyRange] when `max <= min` and the buffer is not empty
    pub fn new(buffer: &'a mut [T], min: T, max: T) -> Result<Self, EnumerationError> {
        Ok(Self {
            odometer: Odometer::new(buffer, min, max)?,
        })
    }
}

impl<T> Enumerator for MultisetIter<'_, T>
    where
    T: Copy + PartialOrd + num_traits::One + Add<Output=T> + Sub<Output=T>,
{
    type Elem = T;

    fn step(&mut self) -> bool {

        match self.odometer.resume() {
            Resume::Yield => return true,
            Resume::Halt => return false,
            Resume::Advance => {}
        }

        loop {
            if self.odometer.at_floor() {
                if !self.odometer.carry() {
                    return false;
                }
            } else {
                let value = self.odometer.decrement();

                //The neighbor is decremented before it is read, so one above is the cap
                let next = self.odometer.cursor + 1;
                if next < self.odometer.len() && self.odometer.buffer[next] > value {
                    self.odometer.buffer[next] = value + T::one();
                }

                if self.odometer.settle() {
                    return true;
                }
            }
        }
    }
    fn current(&self) -> &[T] {
        &*self.odometer.buffer
    }
}
