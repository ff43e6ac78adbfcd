//! 类型标签注册表模块
//!
//! 本模块定义了图像/网格 I/O 中共享的运行时类型标签:
//! - [`PixelKind`]: 像素的逻辑形状(标量、颜色、向量、张量等)
//! - [`ComponentKind`]: 像素分量的底层标量存储类型
//! - [`EncodingMode`]: 持久化数据是文本还是二进制
//! - [`ByteOrder`]: 持久化二进制数据的字节序
//! - [`CellGeometryKind`]: 网格单元的拓扑形状
//!
//! 所有枚举都是 `#[repr(u8)]`,数值即文件中保存的编码,一经发布不得重新编号,
//! 新条目只能追加在末尾。带有"未知"/"不适用"哨兵的枚举以哨兵作为 [`Default`]。
//!
//! 本模块只包含声明。数值校验、字节序编解码等逻辑位于 [`crate::io`]。
//!
//! # 示例
//!
//! ```
//! use iotags::{ComponentKind, PixelKind};
//!
//! let tag: u8 = PixelKind::Rgb.into();
//! assert_eq!(tag, 2);
//! assert_eq!(ComponentKind::default(), ComponentKind::Unknown);
//! ```

use std::fmt;
use std::hash::Hash;

mod cell;
mod component;
mod file;
mod pixel;

pub use cell::CellGeometryKind;
pub use component::ComponentKind;
pub use file::{ByteOrder, EncodingMode};
pub use pixel::PixelKind;

/// 标签族,用于在诊断信息中指明出错的是哪一个枚举
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TagFamily {
    /// [`PixelKind`]
    Pixel,
    /// [`ComponentKind`]
    Component,
    /// [`EncodingMode`]
    Encoding,
    /// [`ByteOrder`]
    ByteOrder,
    /// [`CellGeometryKind`]
    CellGeometry,
}

impl fmt::Display for TagFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagFamily::Pixel => "pixel type",
            TagFamily::Component => "component type",
            TagFamily::Encoding => "file type",
            TagFamily::ByteOrder => "byte order",
            TagFamily::CellGeometry => "cell geometry",
        };
        f.write_str(name)
    }
}

/// 所有标签枚举共有的特征
///
/// 消费方(读写器、解码器)通过这个特征对任意标签族泛型编程。
/// 转换到 `u8` 永远成功,从 `u8` 转换可能失败。
pub trait Tag:
    Copy + Eq + Hash + fmt::Debug + Into<u8> + TryFrom<u8> + 'static
{
    /// 该枚举所属的标签族
    const FAMILY: TagFamily;
}

impl Tag for PixelKind {
    const FAMILY: TagFamily = TagFamily::Pixel;
}

impl Tag for ComponentKind {
    const FAMILY: TagFamily = TagFamily::Component;
}

impl Tag for EncodingMode {
    const FAMILY: TagFamily = TagFamily::Encoding;
}

impl Tag for ByteOrder {
    const FAMILY: TagFamily = TagFamily::ByteOrder;
}

impl Tag for CellGeometryKind {
    const FAMILY: TagFamily = TagFamily::CellGeometry;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};

    fn assert_dense_and_stable<T: Tag + IntoEnumIterator + EnumCount>() {
        let values: Vec<u8> = T::iter().map(Into::into).collect();
        assert_eq!(values.len(), T::COUNT);
        assert_eq!(values, (0..T::COUNT as u8).collect::<Vec<_>>());
    }

    #[test]
    fn numeric_values_are_dense_from_zero() {
        assert_dense_and_stable::<PixelKind>();
        assert_dense_and_stable::<ComponentKind>();
        assert_dense_and_stable::<EncodingMode>();
        assert_dense_and_stable::<ByteOrder>();
        assert_dense_and_stable::<CellGeometryKind>();
    }

    #[test]
    fn families_are_distinct() {
        let families: HashSet<TagFamily> = [
            PixelKind::FAMILY,
            ComponentKind::FAMILY,
            EncodingMode::FAMILY,
            ByteOrder::FAMILY,
            CellGeometryKind::FAMILY,
        ]
        .into_iter()
        .collect();
        assert_eq!(families.len(), 5);
    }

    #[test]
    fn tags_are_single_byte() {
        assert_eq!(std::mem::size_of::<PixelKind>(), 1);
        assert_eq!(std::mem::size_of::<ComponentKind>(), 1);
        assert_eq!(std::mem::size_of::<EncodingMode>(), 1);
        assert_eq!(std::mem::size_of::<ByteOrder>(), 1);
        assert_eq!(std::mem::size_of::<CellGeometryKind>(), 1);
    }
}
