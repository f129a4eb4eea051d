//! Index and slice descriptors for list assignment
//!
//! Keys follow ordinary sequence conventions: negative indices count from the
//! end, slices clamp to the list bounds, and a slice may carry a step.
//! Keys render the way they are written in a subscript (`2`, `-1`, `5:`,
//! `1:7:2`), which is also how they appear in change messages.

use crate::error::ListError;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A `start:stop:step` slice; absent bounds take the natural default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SliceKey {
    /// First position, inclusive
    pub start: Option<isize>,
    /// End position, exclusive
    pub stop: Option<isize>,
    /// Distance between selected positions
    pub step: Option<isize>,
}

impl SliceKey {
    /// Create a slice from optional bounds
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Resolve against a list length into concrete `(start, stop, step)`
    ///
    /// Bounds are clamped, never rejected. For a negative step the clamping
    /// range is `-1..=len-1` so that an omitted stop runs past index 0.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize), ListError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ListError::ZeroStep);
        }

        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = match self.start {
            Some(bound) => clamp(bound),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(bound) => clamp(bound),
            None if step < 0 => lower,
            None => upper,
        };

        Ok((start, stop, step))
    }

    /// Positions selected by this slice, in selection order
    pub fn positions(&self, len: usize) -> Result<Vec<usize>, ListError> {
        let (start, stop, step) = self.indices(len)?;
        let mut positions = Vec::new();
        let mut next = Some(start);
        while let Some(current) = next {
            if (step > 0 && current >= stop) || (step < 0 && current <= stop) {
                break;
            }
            positions.push(current as usize);
            next = current.checked_add(step);
        }
        Ok(positions)
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{}", stop)?;
        }
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}

impl From<Range<usize>> for SliceKey {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(to_isize(range.start)), Some(to_isize(range.end)), None)
    }
}

impl From<RangeFrom<usize>> for SliceKey {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(to_isize(range.start)), None, None)
    }
}

impl From<RangeTo<usize>> for SliceKey {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(to_isize(range.end)), None)
    }
}

impl From<RangeFull> for SliceKey {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

/// Subscript used by [`ObservableList::set_item`](crate::ObservableList::set_item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single position; negative values count from the end
    Index(isize),
    /// A contiguous or stepped range of positions
    Slice(SliceKey),
}

impl Key {
    /// Shorthand for a slice key
    pub fn slice(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Key::Slice(SliceKey::new(start, stop, step))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Slice(slice) => write!(f, "{}", slice),
        }
    }
}

impl From<isize> for Key {
    fn from(index: isize) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index as isize)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(to_isize(index))
    }
}

impl From<SliceKey> for Key {
    fn from(slice: SliceKey) -> Self {
        Key::Slice(slice)
    }
}

impl From<Range<usize>> for Key {
    fn from(range: Range<usize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeFrom<usize>> for Key {
    fn from(range: RangeFrom<usize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeTo<usize>> for Key {
    fn from(range: RangeTo<usize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeFull> for Key {
    fn from(range: RangeFull) -> Self {
        Key::Slice(range.into())
    }
}

/// Replacement content for an assignment
///
/// An index takes exactly one value; a slice takes a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement<T> {
    /// A single value, for index keys
    One(T),
    /// A sequence of values, for slice keys
    Many(Vec<T>),
}

impl<T> Replacement<T> {
    /// Short name of the variant, used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Replacement::One(_) => SINGLE_VALUE,
            Replacement::Many(_) => SEQUENCE,
        }
    }
}

pub(crate) const SINGLE_VALUE: &str = "single value";
pub(crate) const SEQUENCE: &str = "sequence";

impl<T> From<Vec<T>> for Replacement<T> {
    fn from(values: Vec<T>) -> Self {
        Replacement::Many(values)
    }
}

impl<T: fmt::Display> fmt::Display for Replacement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::One(value) => write!(f, "{}", value),
            Replacement::Many(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
        }
    }
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
