use rayon::prelude::*;
use tracing::debug;

use crate::diff::combine::combine;
use crate::diff::compare::compare;
use crate::diff::interval::IntervalList;
use crate::error::{HelixError, Result};
use crate::source::{ChromosomeSource, ChromosomeStream};

/// 窗口化比较参数
#[derive(Clone, Copy, Debug)]
pub struct DiffOpt {
    /// 窗口大小（碱基数），<= 0 表示整条序列作为一个窗口
    pub window_size: i64,
    /// 并行比较窗口的线程数，<= 1 时顺序执行
    pub threads: usize,
}

impl Default for DiffOpt {
    fn default() -> Self {
        Self { window_size: -1, threads: 1 }
    }
}

/// 不断拉取直到读到空块，返回整条染色体的解码文本。
pub fn read_chromosome<P: ChromosomeSource>(person: &P, index: usize) -> Result<Vec<u8>> {
    let mut stream = person.chromosome(index)?;
    let mut out = Vec::new();
    loop {
        let chunk = stream.read_chunk()?;
        if chunk.is_empty() {
            break;
        }
        out.extend_from_slice(&chunk);
    }
    Ok(out)
}

/// 按 `window_size` 切分，最后一个窗口可以更短；`window_size <= 0` 时整体为一个窗口。
pub fn split(seq: &[u8], window_size: i64) -> Vec<&[u8]> {
    if seq.is_empty() {
        return Vec::new();
    }
    if window_size <= 0 {
        return vec![seq];
    }
    seq.chunks(window_size as usize).collect()
}

/// 单个窗口的比较任务：纯函数，可在任意线程上独立执行。
pub fn compare_window(a: &[u8], b: &[u8], index: usize, window_size: i64) -> IntervalList {
    let offset = if window_size <= 0 { 0 } else { index * window_size as usize };
    compare(a, b, offset)
}

fn check_source<P: ChromosomeSource>(person: &P, index: usize, label: &str) -> Result<()> {
    if index >= person.chromosome_count() {
        return Err(HelixError::InvalidArgument(format!(
            "chromosome number {} does not exist in {} (has {})",
            index,
            label,
            person.chromosome_count()
        )));
    }
    Ok(())
}

/// 顺序执行的窗口化比较。
pub fn compare_chromosome<A, B>(a: &A, b: &B, index: usize, window_size: i64) -> Result<IntervalList>
where
    A: ChromosomeSource,
    B: ChromosomeSource,
{
    compare_chromosome_with_opt(a, b, index, &DiffOpt { window_size, threads: 1 })
}

/// 读取两条染色体，按窗口切分后逐窗口比较，最后合并为一个区间列表。
///
/// `opt.threads > 1` 时窗口任务交给 rayon 线程池；所有窗口结果收齐后才调用 `combine`，
/// 而 `combine` 不依赖结果的完成顺序。
pub fn compare_chromosome_with_opt<A, B>(a: &A, b: &B, index: usize, opt: &DiffOpt) -> Result<IntervalList>
where
    A: ChromosomeSource,
    B: ChromosomeSource,
{
    check_source(a, index, "source a")?;
    check_source(b, index, "source b")?;

    // TODO: strip telomeres before windowing once a telomere model exists.
    let data_a = read_chromosome(a, index)?;
    let data_b = read_chromosome(b, index)?;

    let windows_a = split(&data_a, opt.window_size);
    let windows_b = split(&data_b, opt.window_size);
    let n = windows_a.len().max(windows_b.len());
    debug!(
        chromosome = index,
        len_a = data_a.len(),
        len_b = data_b.len(),
        windows = n,
        threads = opt.threads,
        "comparing chromosome"
    );

    let task = |i: usize| -> IntervalList {
        let wa: &[u8] = windows_a.get(i).copied().unwrap_or_default();
        let wb: &[u8] = windows_b.get(i).copied().unwrap_or_default();
        compare_window(wa, wb, i, opt.window_size)
    };

    let per_window: Vec<IntervalList> = if opt.threads <= 1 || n <= 1 {
        (0..n).map(task).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .build()
            .map_err(|e| HelixError::ThreadPool(e.to_string()))?;
        pool.install(|| (0..n).into_par_iter().map(task).collect())
    };

    let merged = combine(&per_window);
    debug!(chromosome = index, intervals = merged.len(), "windows merged");
    Ok(merged)
}
