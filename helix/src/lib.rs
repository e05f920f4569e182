//! # helix
//!
//! 2-bit 打包基因组序列的逐位置差异比较。
//!
//! 本 crate 提供：
//!
//! - **碱基编解码**：4 个碱基打包为 1 字节，首个碱基占最高两位
//! - **打包视图**：借用任意字节存储，按碱基下标 O(1) 访问与顺序遍历
//! - **差异区间**：两条序列按位置对齐比较，输出升序、互不相接的半开失配区间
//! - **区间合并**：k 路堆合并多个窗口的结果，相接区间跨窗口拼接
//! - **窗口化比较**：从染色体数据源读取整条序列，分窗口（可并行）比较后合并
//!
//! 只检测同一位置上的碱基差异，不做插入/缺失比对。
//!
//! ## 快速示例
//!
//! ```rust
//! use helix::diff::{compare, Interval};
//! use helix::seq::PackedSeq;
//! use helix::util::base::{pack, Base::*};
//!
//! let a = [pack(G, A, C, T), pack(A, A, G, C)];
//! let b = [pack(T, A, C, T), pack(A, A, G, C)];
//! let (va, vb) = (PackedSeq::new(&a), PackedSeq::new(&b));
//!
//! assert_eq!(va.to_string(), "GACTAAGC");
//! assert_eq!(compare(&va, &vb, 0), vec![Interval::new(0, 1)]);
//! assert_eq!(compare(&va, &vb, 8), vec![Interval::new(8, 9)]);
//! ```
//!
//! ## 模块说明
//!
//! - [`util`] — 碱基编码 / 打包 / 解包
//! - [`seq`] — 打包序列视图与 `SymbolSeq` 接口
//! - [`diff`] — 差异区间、合并与窗口化染色体比较
//! - [`source`] — 染色体数据源接口及内存实现
//! - [`io`] — FASTA 解析
//! - [`report`] — 比较结果的保存与输出

pub mod diff;
pub mod error;
pub mod io;
pub mod report;
pub mod seq;
pub mod source;
pub mod util;

pub use error::{HelixError, Result};
