//! 差异计算：区间类型、逐位置比较、k 路合并，以及按窗口切分的整条染色体比较。

pub mod chromosome;
pub mod combine;
pub mod compare;
pub mod interval;

pub use chromosome::{compare_chromosome, compare_chromosome_with_opt, read_chromosome, split, DiffOpt};
pub use combine::combine;
pub use compare::{compare, compare_packed, try_compare};
pub use interval::{Interval, IntervalList};
