use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{HelixError, Result};
use crate::util::base::{self, Base, BASES_PER_BYTE};

/// 可按下标读取字节、并能报告长度的存储。
///
/// 打包视图只依赖这两个能力，定长数组、`Vec`、非连续的 `VecDeque` 都可以作为底层存储。
pub trait ByteBuffer {
    fn byte_len(&self) -> usize;
    fn byte(&self, index: usize) -> u8;
}

impl ByteBuffer for [u8] {
    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> ByteBuffer for [u8; N] {
    #[inline]
    fn byte_len(&self) -> usize {
        N
    }
    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteBuffer for Vec<u8> {
    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteBuffer for VecDeque<u8> {
    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }
    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<B: ByteBuffer + ?Sized> ByteBuffer for &B {
    #[inline]
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
    #[inline]
    fn byte(&self, index: usize) -> u8 {
        (**self).byte(index)
    }
}

/// 打包碱基序列的只读视图：借用外部字节存储，每字节 4 个碱基，最后一个字节总是填满。
pub struct PackedSeq<'a, B: ByteBuffer + ?Sized> {
    bytes: &'a B,
    len: usize,
}

impl<'a, B: ByteBuffer + ?Sized> PackedSeq<'a, B> {
    pub fn new(bytes: &'a B) -> Self {
        Self { bytes, len: bytes.byte_len() * BASES_PER_BYTE }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> &'a B {
        self.bytes
    }

    /// 第 `index` 个碱基。只取出所在字节中对应的 2 位。
    pub fn get(&self, index: usize) -> Result<Base> {
        if index >= self.len {
            return Err(HelixError::IndexOutOfRange { index, len: self.len });
        }
        Ok(self.base_unchecked(index))
    }

    /// 调用方保证 `index < len()`，越界时由底层存储 panic。
    #[inline]
    pub(crate) fn base_unchecked(&self, index: usize) -> Base {
        base::lane(self.bytes.byte(index / BASES_PER_BYTE), index % BASES_PER_BYTE)
    }

    pub fn iter(&self) -> Bases<'a, B> {
        Bases { bytes: self.bytes, pos: 0, len: self.len, current: [Base::A; 4] }
    }

    /// 解码为大写字母文本
    pub fn to_ascii(&self) -> Vec<u8> {
        self.iter().map(Base::to_ascii).collect()
    }
}

impl<B: ByteBuffer + ?Sized> Clone for PackedSeq<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ByteBuffer + ?Sized> Copy for PackedSeq<'_, B> {}

impl<B: ByteBuffer + ?Sized> fmt::Display for PackedSeq<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

impl<B: ByteBuffer + ?Sized> fmt::Debug for PackedSeq<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedSeq({} bp: {})", self.len, self)
    }
}

impl<'a, B: ByteBuffer + ?Sized> IntoIterator for &PackedSeq<'a, B> {
    type Item = Base;
    type IntoIter = Bases<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, B: ByteBuffer + ?Sized> IntoIterator for PackedSeq<'a, B> {
    type Item = Base;
    type IntoIter = Bases<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 顺序遍历：每进入一个新字节时整字节解码一次，随后 3 次直接从缓存取。
pub struct Bases<'a, B: ByteBuffer + ?Sized> {
    bytes: &'a B,
    pos: usize,
    len: usize,
    current: [Base; 4],
}

impl<B: ByteBuffer + ?Sized> Iterator for Bases<'_, B> {
    type Item = Base;

    fn next(&mut self) -> Option<Base> {
        if self.pos >= self.len {
            return None;
        }
        let lane = self.pos % BASES_PER_BYTE;
        if lane == 0 {
            self.current = base::unpack(self.bytes.byte(self.pos / BASES_PER_BYTE));
        }
        self.pos += 1;
        Some(self.current[lane])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.pos;
        (rest, Some(rest))
    }
}

impl<B: ByteBuffer + ?Sized> ExactSizeIterator for Bases<'_, B> {}

impl<B: ByteBuffer + ?Sized> FusedIterator for Bases<'_, B> {}
