
use core::ops::{Add, ControlFlow, Sub};

use thiserror::Error;

/// Reasons an enumerator refuses to start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnumerationError {
    /// The half-open range `[min, max)` holds no values, but the buffer has at least one slot to fill
    #[error("empty range: `max` must be greater than `min` when the buffer is not empty")]
    EmptyRange,
    /// Two buffer positions hold equal values, but the enumerator requires distinct elements
    #[error("positions {first} and {second} hold equal elements")]
    DuplicateElement {
        first: usize,
        second: usize,
    },
}

/// The common interface of every enumerator in this crate
///
/// An enumerator owns the exclusive borrow of a caller's buffer and rewrites it in place.
/// Each successful [step](Enumerator::step) leaves the next arrangement in the buffer, where
/// it can be read through [current](Enumerator::current) until the following step.
///
/// This is a lending interface: an arrangement borrows the enumerator, so the std `Iterator`
/// trait isn't implemented.  Use [next_arrangement](Enumerator::next_arrangement) in a
/// `while let` loop instead.
///
pub trait Enumerator {
    type Elem;

    /// Advances to the next arrangement.  Returns `false` once the family is exhausted
    fn step(&mut self) -> bool;

    /// The buffer as it currently stands.  Only meaningful after a step returned `true`
    fn current(&self) -> &[Self::Elem];

    fn next_arrangement(&mut self) -> Option<&[Self::Elem]> {
        if self.step() {
            Some(self.current())
        } else {
            None
        }
    }

    /// Calls `f` with every remaining arrangement
    fn for_each_arrangement<F>(&mut self, mut f: F)
        where
        F: FnMut(&[Self::Elem]),
    {
        while self.step() {
            f(self.current());
        }
    }

    /// Calls `f` with every remaining arrangement, stopping early when `f` breaks
    ///
    /// Breaking out is a cancellation, not an exhaustion: the buffer keeps the arrangement
    /// `f` last saw, and any reset the enumerator performs at the end of its family is skipped.
    fn try_for_each_arrangement<B, F>(&mut self, mut f: F) -> ControlFlow<B>
        where
        F: FnMut(&[Self::Elem]) -> ControlFlow<B>,
    {
        while self.step() {
            if let ControlFlow::Break(value) = f(self.current()) {
                return ControlFlow::Break(value);
            }
        }
        ControlFlow::Continue(())
    }
}

/// Where an enumerator is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    Fresh,
    Running,
    Exhausted,
}

/// What a range enumerator should do after [Odometer::resume]
pub(crate) enum Resume {
    /// The empty arrangement is ready, skip the digit loop
    Yield,
    /// Nothing left to produce
    Halt,
    /// Run the digit loop from the cursor
    Advance,
}

/// The digit array shared by the four range enumerators
///
/// Every slot of the buffer is one digit, counting down from `max - 1` to `min`.  A digit
/// holding `max` is outside the range and means "not yet entered".  The rightmost digit
/// moves fastest, and exhausted digits carry into their left neighbor.
///
pub(crate) struct Odometer<'a, T> {

    /// The caller's buffer, doubling as the digit array
    pub(crate) buffer: &'a mut [T],

    /// Smallest value a digit may take
    pub(crate) min: T,

    /// One past the largest value a digit may take.  Also the sentinel for an unset digit
    pub(crate) max: T,

    /// The active digit
    pub(crate) cursor: usize,

    progress: Progress,
}

impl<'a, T> Odometer<'a, T>
    where
    T: Copy + PartialOrd + num_traits::One + Add<Output=T> + Sub<Output=T>,
{
    pub(crate) fn new(buffer: &'a mut [T], min: T, max: T) -> Result<Self, EnumerationError> {

        //A zero-length buffer has exactly one arrangement regardless of the range
        if !buffer.is_empty() && !(max > min) {
            return Err(EnumerationError::EmptyRange);
        }

        Ok(Self {
            buffer,
            min,
            max,
            cursor: 0,
            progress: Progress::Fresh,
        })
    }
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }
    pub(crate) fn resume(&mut self) -> Resume {

        match self.progress {
            Progress::Exhausted => Resume::Halt,
            Progress::Fresh => {
                self.progress = Progress::Running;
                if self.buffer.is_empty() {
                    return Resume::Yield;
                }
                self.buffer.fill(self.max);
                self.cursor = 0;
                Resume::Advance
            },
            Progress::Running => {
                if self.buffer.is_empty() {
                    self.progress = Progress::Exhausted;
                    return Resume::Halt;
                }
                self.cursor = self.len() - 1;
                Resume::Advance
            },
        }
    }
    /// True when the active digit has no lower value left to take
    pub(crate) fn at_floor(&self) -> bool {
        self.buffer[self.cursor] <= self.min
    }
    /// Moves the active digit one value down and returns the new value
    pub(crate) fn decrement(&mut self) -> T {
        let digit = &mut self.buffer[self.cursor];
        *digit = *digit - T::one();
        *digit
    }
    /// Resets the active digit and moves the cursor to its left neighbor.  Returns `false`
    /// when there was no neighbor, in which case the odometer is now exhausted
    pub(crate) fn carry(&mut self) -> bool {

        self.buffer[self.cursor] = self.max;
        if self.cursor == 0 {
            self.exhaust();
            false
        } else {
            self.cursor -= 1;
            true
        }
    }
    /// Moves the cursor right.  Returns `true` when it passed the last digit, meaning the
    /// buffer now holds a complete arrangement
    pub(crate) fn settle(&mut self) -> bool {
        self.cursor += 1;
        self.cursor == self.len()
    }
    fn exhaust(&mut self) {
        self.buffer.fill(self.max);
        self.progress = Progress::Exhausted;
    }
}
