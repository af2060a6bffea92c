
use core::ops::{Add, Sub};

use crate::common::*;

/// Enumerates every injective tuple over `[min, max)`, i.e. ordered selections without repetition
///
/// `[1, 2]` and `[2, 1]` are both produced, but `[1, 1]` is not.  A range of `r` values yields
/// the falling factorial `r! / (r - L)!`, which is zero when `r < L`.
///
/// ## Algorithm Details
///
/// The counter of [CombinationIter](crate::CombinationIter), except that a digit which steps down
/// onto a value already held by a digit to its left is rejected, and steps down again before
/// the cursor moves on.  Checking a candidate scans the digits to its left, so a step costs
/// `O(L)` per rejected value.
///
/// Order is reverse lexicographic among injective tuples.
/// ```txt
/// L = 2, [0, 3):  [2, 1], [2, 0], [1, 2], [1, 0], [0, 2], [0, 1]
/// ```
///
/// On completion the buffer is reset to all `max`.
///
pub struct OrderedSubsetIter<'a, T> {
    odometer: Odometer<'a, T>,
}

impl<'a, T> OrderedSubsetIter<'a, T>
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

impl<T> Enumerator for OrderedSubsetIter<'_, T>
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

                //Taken by a digit on the left, keep the cursor here and try the next value down
                let taken = self.odometer.buffer[..self.odometer.cursor].contains(&value);
                if !taken && self.odometer.settle() {
                    return true;
                }
            }
        }
    }
    fn current(&self) -> &[T] {
        &*self.odometer.buffer
    }
}
