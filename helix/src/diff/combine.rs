use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::diff::interval::{Interval, IntervalList};

/// 将若干各自有序的区间列表合并为一个有序列表。
///
/// 典型用法是对一条长序列分窗口分别 `compare`，再把各窗口结果合并：
/// 某窗口最后一个区间 `[x, y)` 与下一窗口第一个区间 `[y, z)` 相接时，应合并为 `[x, z)`。
/// 输入列表的先后顺序不影响结果。
///
/// 时间 O(n log k)，n 为区间总数，k 为列表数。
pub fn combine(lists: &[IntervalList]) -> IntervalList {
    // 堆元素：(区间起点, 所属列表, 列表内下标)
    let mut heap: BinaryHeap<Reverse<(usize, usize, usize)>> = lists
        .iter()
        .enumerate()
        .filter_map(|(li, list)| list.first().map(|iv| Reverse((iv.start, li, 0))))
        .collect();

    let mut result: IntervalList = Vec::with_capacity(lists.iter().map(Vec::len).sum());
    while let Some(Reverse((_, li, pos))) = heap.pop() {
        let iv: Interval = lists[li][pos];
        match result.last_mut() {
            Some(last) if last.end >= iv.start => last.end = last.end.max(iv.end),
            _ => result.push(iv),
        }
        if let Some(next) = lists[li].get(pos + 1) {
            heap.push(Reverse((next.start, li, pos + 1)));
        }
    }
    result
}
