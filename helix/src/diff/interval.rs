use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// 差异区间，半开 `[start, end)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

/// 按 `start` 升序排列的区间列表
pub type IntervalList = Vec<Interval>;

impl Interval {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval start {} > end {}", start, end);
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    pub fn shifted(self, by: usize) -> Self {
        Self { start: self.start + by, end: self.end + by }
    }
}

impl From<Range<usize>> for Interval {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Interval> for Range<usize> {
    fn from(iv: Interval) -> Self {
        iv.start..iv.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// 列表是否严格升序且互不相交、互不相接：`list[i].end < list[i+1].start`。
pub fn is_ascending_disjoint(list: &[Interval]) -> bool {
    list.windows(2).all(|w| w[0].end < w[1].start)
}

/// 列表覆盖的位置总数
pub fn covered(list: &[Interval]) -> usize {
    list.iter().map(Interval::len).sum()
}
