//! 科学图像/网格 I/O 的运行时类型标签
//!
//! 读写器在编译期不知道数据的具体类型,需要在运行时描述:
//! - 像素的逻辑形状 ([`PixelKind`])
//! - 分量的标量存储类型 ([`ComponentKind`])
//! - 文本还是二进制编码 ([`EncodingMode`])
//! - 二进制数据的字节序 ([`ByteOrder`])
//! - 网格单元的几何形状 ([`CellGeometryKind`])
//!
//! 每个标签都是单字节的稳定数值,可以写入文件头或跨进程传递。
//!
//! # 主要模块
//! - [`tags`]: 标签注册表,只有声明
//! - [`io`]: 标签校验、字节序编解码和二进制文件头
//! - [`mesh`]: 按单元几何类型索引的查找表
//!
//! # 旧式常量名
//!
//! 启用 `legacy` 系列 cargo 特性后,所有枚举值还会以不带作用域的常量名导出到
//! crate 根部(如 `iotags::SCALAR`)。这些常量均已标记为弃用。
//! 对照测试需要开启特性才会编译:`cargo test --features legacy`。
//!
//! # 示例
//!
//! ```
//! use iotags::io::TagHeader;
//! use iotags::{ByteOrder, ComponentKind, EncodingMode, PixelKind};
//!
//! let header = TagHeader::new(PixelKind::Rgb, ComponentKind::UChar)
//!     .with_encoding(EncodingMode::Binary)
//!     .with_byte_order(ByteOrder::LittleEndian);
//! let decoded = TagHeader::from_bytes(&header.to_bytes())?;
//! assert_eq!(decoded, header);
//! # Ok::<(), iotags::io::HeaderError>(())
//! ```
#![cfg_attr(
    feature = "legacy-pixel",
    doc = "```\n#[allow(deprecated)]\nlet kind = iotags::SCALAR;\nassert_eq!(kind, iotags::PixelKind::Scalar);\n```"
)]
#![cfg_attr(
    not(feature = "legacy-pixel"),
    doc = "```compile_fail\nlet _ = iotags::SCALAR;\n```"
)]
#![cfg_attr(
    not(feature = "legacy-component"),
    doc = "```compile_fail\nlet _ = iotags::UCHAR;\n```"
)]
#![cfg_attr(
    not(feature = "legacy-file"),
    doc = "```compile_fail\nlet _ = iotags::BINARY;\n```"
)]
#![cfg_attr(
    not(feature = "legacy-byte-order"),
    doc = "```compile_fail\nlet _ = iotags::OrderNotApplicable;\n```"
)]
#![cfg_attr(
    not(feature = "legacy-cell"),
    doc = "```compile_fail\nlet _ = iotags::VERTEX_CELL;\n```"
)]
#![cfg_attr(
    not(feature = "legacy-cell"),
    doc = "```compile_fail\nlet _ = iotags::LAST_ITK_CELL;\n```"
)]
#![cfg_attr(
    feature = "legacy-cell",
    doc = "```\n#[allow(deprecated)]\nlet markers = (iotags::LAST_ITK_CELL, iotags::MAX_ITK_CELLS);\nassert_eq!(markers, (9, 255));\n```"
)]

pub mod io;
pub mod mesh;
pub mod tags;

#[cfg(any(
    feature = "legacy-pixel",
    feature = "legacy-component",
    feature = "legacy-file",
    feature = "legacy-byte-order",
    feature = "legacy-cell"
))]
mod legacy;

#[cfg(any(
    feature = "legacy-pixel",
    feature = "legacy-component",
    feature = "legacy-file",
    feature = "legacy-byte-order",
    feature = "legacy-cell"
))]
pub use legacy::*;

pub use mesh::CellTable;
pub use tags::{
    ByteOrder, CellGeometryKind, ComponentKind, EncodingMode, PixelKind, Tag, TagFamily,
};
