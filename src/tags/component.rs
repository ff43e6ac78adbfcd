//! 分量类型标签
//!
//! 分量类型指标量像素或复合像素中每个元素的实际存储类型。

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::ffi::{c_long, c_ulong};
use std::mem;
use strum::{Display, EnumCount, EnumIter, EnumString};

/// 像素分量的底层标量存储类型
///
/// 枚举值的先后顺序没有数值含义(`LongLong` 排在 `ULongLong` 之前),
/// 因此本类型不实现 `Ord`。比较"更宽"的类型应使用 [`ComponentKind::size_in_bytes`]。
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    IntoPrimitive,
    TryFromPrimitive,
    EnumIter,
    EnumCount,
    Display,
    EnumString,
)]
#[repr(u8)]
pub enum ComponentKind {
    /// 未知分量类型,默认值
    #[strum(serialize = "unknown")]
    Unknown = 0,
    /// 8位无符号整数
    #[strum(serialize = "unsigned_char")]
    UChar = 1,
    /// 8位有符号整数
    #[strum(serialize = "char")]
    Char = 2,
    /// 16位无符号整数
    #[strum(serialize = "unsigned_short")]
    UShort = 3,
    /// 16位有符号整数
    #[strum(serialize = "short")]
    Short = 4,
    /// 32位无符号整数
    #[strum(serialize = "unsigned_int")]
    UInt = 5,
    /// 32位有符号整数
    #[strum(serialize = "int")]
    Int = 6,
    /// 平台 C `unsigned long`
    #[strum(serialize = "unsigned_long")]
    ULong = 7,
    /// 平台 C `long`
    #[strum(serialize = "long")]
    Long = 8,
    /// 64位有符号整数
    #[strum(serialize = "long_long")]
    LongLong = 9,
    /// 64位无符号整数
    #[strum(serialize = "unsigned_long_long")]
    ULongLong = 10,
    /// 单精度浮点数
    #[strum(serialize = "float")]
    Float = 11,
    /// 双精度浮点数
    #[strum(serialize = "double")]
    Double = 12,
    /// 扩展精度浮点数
    #[strum(serialize = "long_double")]
    LDouble = 13,
}

impl Default for ComponentKind {
    fn default() -> Self {
        ComponentKind::Unknown
    }
}

/// C `long double` 的存储宽度
const LONG_DOUBLE_BYTES: usize = if cfg!(target_env = "msvc") { 8 } else { 16 };

impl ComponentKind {
    /// 单个分量占用的字节数,`Unknown` 返回 0
    pub const fn size_in_bytes(&self) -> usize {
        match self {
            ComponentKind::Unknown => 0,
            ComponentKind::UChar => 1,
            ComponentKind::Char => 1,
            ComponentKind::UShort => 2,
            ComponentKind::Short => 2,
            ComponentKind::UInt => 4,
            ComponentKind::Int => 4,
            ComponentKind::ULong => mem::size_of::<c_ulong>(),
            ComponentKind::Long => mem::size_of::<c_long>(),
            ComponentKind::LongLong => 8,
            ComponentKind::ULongLong => 8,
            ComponentKind::Float => 4,
            ComponentKind::Double => 8,
            ComponentKind::LDouble => LONG_DOUBLE_BYTES,
        }
    }

    /// 是否为有符号类型(浮点数视为有符号)
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            ComponentKind::Char
                | ComponentKind::Short
                | ComponentKind::Int
                | ComponentKind::Long
                | ComponentKind::LongLong
                | ComponentKind::Float
                | ComponentKind::Double
                | ComponentKind::LDouble
        )
    }

    /// 是否为浮点类型
    pub const fn is_floating_point(&self) -> bool {
        matches!(
            self,
            ComponentKind::Float | ComponentKind::Double | ComponentKind::LDouble
        )
    }

    /// 是否为整数类型
    pub const fn is_integer(&self) -> bool {
        !self.is_floating_point() && !matches!(self, ComponentKind::Unknown)
    }
}
