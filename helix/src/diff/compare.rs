use crate::diff::interval::{Interval, IntervalList};
use crate::error::{HelixError, Result};
use crate::seq::{ByteBuffer, PackedSeq, SymbolSeq};
use crate::util::base::BASES_PER_BYTE;

/// 逐位置记录失配游程，生成带偏移的半开区间。
struct RunBuilder {
    offset: usize,
    open: Option<usize>,
    out: IntervalList,
}

impl RunBuilder {
    fn new(offset: usize) -> Self {
        Self { offset, open: None, out: Vec::new() }
    }

    #[inline]
    fn mismatch(&mut self, pos: usize) {
        if self.open.is_none() {
            self.open = Some(pos);
        }
    }

    #[inline]
    fn matched(&mut self, pos: usize) {
        if let Some(start) = self.open.take() {
            self.out.push(Interval::new(start + self.offset, pos + self.offset));
        }
    }

    /// `sz` 为两序列公共长度，`longest` 为较长者长度；超出部分整体视为失配。
    fn finish(mut self, sz: usize, longest: usize) -> IntervalList {
        self.matched(sz);
        if longest > sz {
            let (tail_start, tail_end) = (sz + self.offset, longest + self.offset);
            match self.out.last_mut() {
                // 末尾游程恰好止于公共部分末端：直接延伸，避免在边界处断开
                Some(last) if last.end == tail_start => last.end = tail_end,
                _ => self.out.push(Interval::new(tail_start, tail_end)),
            }
        }
        self.out
    }
}

/// 返回 `a`、`b` 之间按位置对齐的失配区间（升序、互不相接），坐标整体加上 `offset`。
///
/// 长度不等时，较长序列多出的尾部整段计为失配。
/// 时间 O(min(m, n))，空间 O(k)，k 为失配游程数。
pub fn compare<S: SymbolSeq + ?Sized>(a: &S, b: &S, offset: usize) -> IntervalList {
    let (m, n) = (a.symbol_count(), b.symbol_count());
    let sz = m.min(n);
    let mut runs = RunBuilder::new(offset);
    for i in 0..sz {
        if a.symbol_at(i) != b.symbol_at(i) {
            runs.mismatch(i);
        } else {
            runs.matched(i);
        }
    }
    runs.finish(sz, m.max(n))
}

/// 偏移以有符号数给出时的入口。负偏移，或 `offset + max(m, n)` 超出 `usize` 时报 `InvalidArgument`。
pub fn try_compare<S: SymbolSeq + ?Sized>(a: &S, b: &S, offset: i64) -> Result<IntervalList> {
    let longest = a.symbol_count().max(b.symbol_count());
    let offset = checked_offset(offset, longest)?;
    Ok(compare(a, b, offset))
}

fn checked_offset(offset: i64, longest: usize) -> Result<usize> {
    let offset = usize::try_from(offset)
        .map_err(|_| HelixError::InvalidArgument("offset cannot be less than 0".into()))?;
    offset.checked_add(longest).ok_or_else(|| {
        HelixError::InvalidArgument(format!(
            "offset {} plus sequence length {} overflows",
            offset, longest
        ))
    })?;
    Ok(offset)
}

/// 直接比较两个打包视图：先整字节异或，相同字节一步跳过 4 个碱基，只在不同的字节内逐 lane 检查。
/// 结果与 `compare` 作用于同样两个视图时一致。
pub fn compare_packed<A, B>(a: &PackedSeq<'_, A>, b: &PackedSeq<'_, B>, offset: usize) -> IntervalList
where
    A: ByteBuffer + ?Sized,
    B: ByteBuffer + ?Sized,
{
    let (ab, bb) = (a.bytes(), b.bytes());
    let shared_bytes = ab.byte_len().min(bb.byte_len());
    let mut runs = RunBuilder::new(offset);
    for k in 0..shared_bytes {
        let base_pos = k * BASES_PER_BYTE;
        let diff = ab.byte(k) ^ bb.byte(k);
        if diff == 0 {
            runs.matched(base_pos);
            continue;
        }
        for lane in 0..BASES_PER_BYTE {
            let shift = 6 - 2 * lane;
            if (diff >> shift) & 0b11 != 0 {
                runs.mismatch(base_pos + lane);
            } else {
                runs.matched(base_pos + lane);
            }
        }
    }
    runs.finish(shared_bytes * BASES_PER_BYTE, a.len().max(b.len()))
}
