
use core::ops::{Add, Sub};

use crate::common::*;

/// Enumerates every tuple over `[min, max)` with repetition, where element order matters
///
/// This is a plain mixed-radix counter with one digit per buffer slot, each digit having
/// radix `max - min`.  A buffer of length `L` receives all `(max - min)^L` tuples.
///
/// ## Sequence Characteristics
///
/// Tuples come out in reverse lexicographic order.  The rightmost digit moves fastest,
/// counting down from `max - 1` to `min` before carrying into its left neighbor.
/// ```txt
/// L = 2, [1, 3):  [2, 2], [2, 1], [1, 2], [1, 1]
/// ```
///
/// When the enumeration runs to completion, every slot of the buffer is reset to `max`.
/// Stopping early leaves the last tuple in place.
///
pub struct CombinationIter<'a, T> {
    odometer: Odometer<'a, T>,
}

impl<'a, T> CombinationIter<'a, T>
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

impl<T> Enumerator for CombinationIter<'_, T>
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
                self.odometer.decrement();
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
