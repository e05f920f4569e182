//! 序列抽象：打包视图，以及差异引擎所需的“可按下标访问、已知长度”的序列接口。

pub mod packed;

pub use packed::{ByteBuffer, PackedSeq};

/// 可随机访问的定长符号序列。
pub trait SymbolSeq {
    type Symbol: PartialEq;

    fn symbol_count(&self) -> usize;

    /// `index` 必须小于 `symbol_count()`。
    fn symbol_at(&self, index: usize) -> Self::Symbol;
}

impl<T: Copy + PartialEq> SymbolSeq for [T] {
    type Symbol = T;

    #[inline]
    fn symbol_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn symbol_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<B: ByteBuffer + ?Sized> SymbolSeq for PackedSeq<'_, B> {
    type Symbol = crate::util::base::Base;

    #[inline]
    fn symbol_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn symbol_at(&self, index: usize) -> Self::Symbol {
        self.base_unchecked(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::base::{pack, Base::*};

    #[test]
    fn slices_and_views_agree() {
        let data = [pack(G, A, C, T)];
        let view = PackedSeq::new(&data);
        let decoded = [G, A, C, T];
        assert_eq!(view.symbol_count(), decoded.symbol_count());
        for i in 0..4 {
            assert_eq!(view.symbol_at(i), decoded[..].symbol_at(i));
        }
        assert_eq!(b"GACT"[..].symbol_at(2), b'C');
    }
}
