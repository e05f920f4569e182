//! 演示如何在 library 模式下使用 helix 比较两个个体的同一条染色体。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_diff
//! ```

use helix::diff::{combine, compare, compare_chromosome_with_opt, DiffOpt};
use helix::seq::PackedSeq;
use helix::source::PackedPerson;
use helix::util::base::{pack, Base::*};

fn main() -> helix::Result<()> {
    // 1. 两段打包序列，第 4、5 个碱基不同
    let a = vec![pack(A, C, G, T), pack(A, C, G, T)];
    let b = vec![pack(A, C, G, A), pack(C, C, G, T)];
    let (va, vb) = (PackedSeq::new(&a), PackedSeq::new(&b));
    println!("序列 a: {}", va);
    println!("序列 b: {}", vb);

    // 2. 整体比较
    let whole = compare(&va, &vb, 0);
    println!("整体比较: {:?}", whole);

    // 3. 分两个窗口比较后合并，跨窗口的失配被拼成一个区间
    let left = compare(&va.to_ascii()[..4], &vb.to_ascii()[..4], 0);
    let right = compare(&va.to_ascii()[4..], &vb.to_ascii()[4..], 4);
    println!("窗口结果: {:?} {:?}", left, right);
    println!("合并结果: {:?}", combine(&[left, right]));

    // 4. 通过数据源接口，分窗口并行比较整条染色体
    let p1 = PackedPerson::new(vec![a.clone(), a], 1)?;
    let p2 = PackedPerson::new(vec![b.clone(), b], 1)?;
    let opt = DiffOpt { window_size: 4, threads: 2 };
    let intervals = compare_chromosome_with_opt(&p1, &p2, 1, &opt)?;
    for iv in &intervals {
        println!("chromosome 1 mismatch: {}", iv);
    }
    Ok(())
}
