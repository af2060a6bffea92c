
use crate::common::*;

/// Enumerates every distinct ordering of a buffer that may contain repeated elements
///
/// Orderings that are equal element by element are produced only once, so a buffer with value
/// multiplicities `m_1 .. m_k` yields `N! / (m_1! * .. * m_k!)` arrangements.  `[1, 1, 2]` for
/// example yields `[2, 1, 1]`, `[1, 2, 1]` and `[1, 1, 2]`.  Equality is decided with `==`.
///
/// When the enumeration finishes, the buffer is put back the way it was at construction.
/// Stopping early leaves the last arrangement in place.
///
/// ## Algorithm Details
///
/// At construction, a snapshot of the buffer is taken and each position is tagged with the
/// first position holding an equal value.  Positions are then filled left to right, each one
/// choosing an index into the snapshot, trying indices from the highest down.  An index is
/// rejected when an earlier position already chose it.
///
/// Among equal elements only the arrangement that keeps them in their original relative order
/// is accepted.  When an earlier position `s` holds an equal element with a *higher* snapshot
/// index than the candidate, the candidate still has to be placed somewhere after `s`, so
/// nothing below `s` can complete and the search backs up to `s` directly.
///
/// The result is reverse lexicographic order over snapshot index sequences.  The identity
/// sequence comes last, which is why the buffer ends up in its original arrangement.
///
pub struct PermutationIter<'a, T, const N: usize> {

    buffer: &'a mut [T; N],

    /// The buffer as it was at construction
    initial: [T; N],

    /// For each snapshot index, the lowest index holding an equal value
    tags: [usize; N],

    /// For each position, the snapshot index it currently holds.  `N` means none yet
    choices: [usize; N],

    /// The position being filled
    depth: usize,

    progress: Progress,
}

impl<'a, T, const N: usize> PermutationIter<'a, T, N>
    where
    T: Clone + PartialEq,
{
    pub fn new(buffer: &'a mut [T; N]) -> Self {

        let mut tags = [0; N];
        for (idx, tag) in tags.iter_mut().enumerate() {
            *tag = buffer[..idx].iter()
                .position(|elem| *elem == buffer[idx])
                .unwrap_or(idx);
        }

        Self {
            initial: buffer.clone(),
            buffer,
            tags,
            choices: [N; N],
            depth: 0,
            progress: Progress::Fresh,
        }
    }
    /// The arrangement the buffer will be restored to
    pub fn initial(&self) -> &[T] {
        &self.initial[..]
    }
    fn exhaust(&mut self) {
        self.buffer.clone_from_slice(&self.initial);
        self.progress = Progress::Exhausted;
    }
}

impl<T, const N: usize> Enumerator for PermutationIter<'_, T, N>
    where
    T: Clone + PartialEq,
{
    type Elem = T;

    fn step(&mut self) -> bool {

        match self.progress {
            Progress::Exhausted => return false,
            Progress::Fresh => {
                self.progress = Progress::Running;
                if N == 0 {
                    return true;
                }
                self.depth = 0;
            },
            Progress::Running => {
                if N == 0 {
                    self.progress = Progress::Exhausted;
                    return false;
                }
                self.depth = N - 1;
            },
        }

        loop {
            let depth = self.depth;

            if self.choices[depth] == 0 {
                //Every index tried at this position, back up
                self.choices[depth] = N;
                if depth == 0 {
                    self.exhaust();
                    return false;
                }
                self.depth -= 1;
                continue;
            }

            self.choices[depth] -= 1;
            let candidate = self.choices[depth];

            let choices = &self.choices;
            let tags = &self.tags;
            let conflict = (0..depth).find(|&pos| {
                tags[choices[pos]] == tags[candidate] && choices[pos] >= candidate
            });

            match conflict {
                None => {
                    self.buffer[depth] = self.initial[candidate].clone();
                    if depth + 1 == N {
                        return true;
                    }
                    self.depth += 1;
                },
                Some(pos) if self.choices[pos] > candidate => {
                    //Nothing after `pos` can be completed canonically
                    for choice in self.choices[pos + 1..=depth].iter_mut() {
                        *choice = N;
                    }
                    self.depth = pos;
                },
                Some(_) => {
                    //Index already in use, try the next one down
                },
            }
        }
    }
    fn current(&self) -> &[T] {
        &self.buffer[..]
    }
}
