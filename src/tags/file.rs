//! 文件编码方式与字节序标签
//!
//! 部分读写器会使用这些标签,部分会忽略。

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// 持久化数据的写出方式:文本或二进制
///
/// 网格 I/O 与图像 I/O 历史上对同一取值使用了不同拼写。两种拼写都绑定到
/// 同一个变体上(见 [`EncodingMode::BINARY`] 与 [`EncodingMode::TYPENOTAPPLICABLE`]),
/// 相等比较、哈希和 `match` 都无法区分它们。
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
pub enum EncodingMode {
    /// 人类可读文本
    #[strum(serialize = "ASCII")]
    Ascii = 0,
    /// 原始二进制
    #[strum(serialize = "Binary")]
    Binary = 1,
    /// 不适用,默认值
    #[strum(serialize = "TypeNotApplicable")]
    TypeNotApplicable = 2,
}

impl EncodingMode {
    /// [`EncodingMode::Ascii`] 的历史拼写
    pub const ASCII: Self = Self::Ascii;
    /// [`EncodingMode::Binary`] 的历史拼写
    pub const BINARY: Self = Self::Binary;
    /// [`EncodingMode::TypeNotApplicable`] 的历史拼写
    pub const TYPENOTAPPLICABLE: Self = Self::TypeNotApplicable;

    /// 是否指定了具体的编码方式
    pub const fn is_applicable(&self) -> bool {
        !matches!(self, EncodingMode::TypeNotApplicable)
    }
}

impl Default for EncodingMode {
    fn default() -> Self {
        EncodingMode::TypeNotApplicable
    }
}

/// 持久化二进制数据的字节序
///
/// `OrderNotApplicable` 与两种具体字节序都不同,往返过程中必须原样保留,
/// 不能被替换成平台字节序。
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
pub enum ByteOrder {
    /// 大端字节序,高位字节在前
    BigEndian = 0,
    /// 小端字节序,低位字节在前
    LittleEndian = 1,
    /// 不适用,默认值
    OrderNotApplicable = 2,
}

impl ByteOrder {
    /// 是否指定了具体的字节序
    pub const fn is_applicable(&self) -> bool {
        !matches!(self, ByteOrder::OrderNotApplicable)
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::OrderNotApplicable
    }
}
