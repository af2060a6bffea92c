
use core::ops::{Add, Sub};

use crate::common::*;

/// Enumerates every `L`-element subset of `[min, max)`
///
/// Neither repetition nor order is significant: each subset comes out once, with its elements
/// in strictly decreasing order.  A range of `r` values yields `C(r, L)` subsets, which is none
/// at all when `r < L` (the zero-length buffer still gets its single empty subset).
///
/// After a digit steps down, its right neighbor is clamped to the new value, so the
/// neighbor's own next step lands strictly below it.
/// ```txt
/// L = 2, [0, 4):  [3, 2], [3, 1], [3, 0], [2, 1], [2, 0], [1, 0]
/// ```
///
/// On completion the buffer is reset to all `max`.
///
pub struct SubsetIter<'a, T> {
    odometer: Odometer<'a, T>,
}

impl<'a, T> SubsetIter<'a, T>
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

impl<T> Enumerator for SubsetIter<'_, T>
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

                let next = self.odometer.cursor + 1;
                if next < self.odometer.len() && self.odometer.buffer[next] > value {
                    self.odometer.buffer[next] = value;
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
