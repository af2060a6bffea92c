
use crate::common::*;

/// Enumerates all `N!` orderings of a buffer whose elements are pairwise distinct
///
/// Each step swaps a single pair of elements (Heap's algorithm), so the elements themselves are
/// never compared.  The flip side is that nothing checks the distinctness precondition: a
/// buffer with repeated elements yields the same arrangement more than once.  Use
/// [new_checked](SimplePermutationIter::new_checked) to verify the buffer up front, or
/// [PermutationIter](crate::PermutationIter) to collapse repeats.
///
/// ## Algorithm Details
///
/// The recursion of Heap's algorithm is unrolled onto an explicit stack of counters, one per
/// depth.  Depth `d` owns the sub-array `[0, N - d)`.  Each time a depth finishes a pass over
/// its sub-array it swaps the sub-array's last element with either the first element (odd
/// width) or the element at its counter (even width), then starts the next pass.
/// ```txt
/// [0, 1, 2], [1, 0, 2], [2, 0, 1], [0, 2, 1], [1, 2, 0], [2, 1, 0]
/// ```
///
/// The buffer is **not** restored when the enumeration finishes, it is left in whatever
/// arrangement the last swap produced.
///
pub struct SimplePermutationIter<'a, T, const N: usize> {

    buffer: &'a mut [T; N],

    /// Number of completed passes at each depth
    counters: [usize; N],

    /// The depth whose counter is being advanced
    depth: usize,

    progress: Progress,
}

impl<'a, T, const N: usize> SimplePermutationIter<'a, T, N> {
    /// Starts from the current contents of `buffer`, which must all be distinct
    pub fn new(buffer: &'a mut [T; N]) -> Self {
        Self {
            buffer,
            counters: [0; N],
            depth: 0,
            progress: Progress::Fresh,
        }
    }
    /// Like [new](SimplePermutationIter::new), but rejects a buffer holding equal elements
    pub fn new_checked(buffer: &'a mut [T; N]) -> Result<Self, EnumerationError>
        where
        T: PartialEq,
    {
        for second in 0..N {
            if let Some(first) = buffer[..second].iter().position(|elem| *elem == buffer[second]) {
                return Err(EnumerationError::DuplicateElement { first, second });
            }
        }
        Ok(Self::new(buffer))
    }
}

impl<T, const N: usize> Enumerator for SimplePermutationIter<'_, T, N> {
    type Elem = T;

    fn step(&mut self) -> bool {

        match self.progress {
            Progress::Exhausted => return false,
            Progress::Fresh => {
                self.progress = Progress::Running;
                if N == 0 {
                    return true;
                }
                self.counters[0] = 0;
                self.depth = 0;
            },
            Progress::Running => {
                if N == 0 {
                    self.progress = Progress::Exhausted;
                    return false;
                }
            },
        }

        loop {
            let width = N - self.depth;
            let count = self.counters[self.depth];

            if width >= 2 && count < width {
                //Descend, starting a fresh pass one level down
                self.depth += 1;
                self.counters[self.depth] = 0;

            } else if count >= width {
                //This depth is done.  Climb back up and swap for the parent's next pass
                if self.depth == 0 {
                    self.progress = Progress::Exhausted;
                    return false;
                }
                self.depth -= 1;

                let width = N - self.depth;
                let count = self.counters[self.depth];
                if count < width - 1 {
                    let pivot = if width % 2 == 1 { 0 } else { count };
                    self.buffer.swap(width - 1, pivot);
                }
                self.counters[self.depth] += 1;

            } else {
                //Deepest level.  Mark it finished so the next step climbs out
                self.counters[self.depth] = width + 1;
                return true;
            }
        }
    }
    fn current(&self) -> &[T] {
        &self.buffer[..]
    }
}
