use serde::{Deserialize, Serialize};
use std::fmt;

/// 四种碱基，判别值即其 2-bit 编码。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Base {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

/// 每个字节容纳的碱基数
pub const BASES_PER_BYTE: usize = 4;

const BY_CODE: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

impl Base {
    /// 取低 2 位查表，无分支。
    #[inline]
    pub fn from_code(code: u8) -> Base {
        BY_CODE[(code & 0b11) as usize]
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_ascii(b: u8) -> Option<Base> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    #[inline]
    pub fn to_ascii(self) -> u8 {
        b"ACGT"[self as usize]
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}

/// 将 4 个碱基打包为 1 字节，`b0` 占最高两位。
#[inline]
pub fn pack(b0: Base, b1: Base, b2: Base, b3: Base) -> u8 {
    (b0.code() << 6) | (b1.code() << 4) | (b2.code() << 2) | b3.code()
}

#[inline]
pub fn unpack(byte: u8) -> [Base; 4] {
    [
        Base::from_code(byte >> 6),
        Base::from_code(byte >> 4),
        Base::from_code(byte >> 2),
        Base::from_code(byte),
    ]
}

/// 只解码字节中的第 `lane` 个碱基（0..4），lane 0 为最高两位。
#[inline]
pub fn lane(byte: u8, lane: usize) -> Base {
    let shift = 6 - 2 * (lane % BASES_PER_BYTE);
    Base::from_code(byte >> shift)
}
