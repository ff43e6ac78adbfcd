//! 标签解码错误模块
//!
//! 从文件头、网络报文等外部数据中读出的标签数值必须先校验是否属于对应的枚举,
//! 不能把越界值带入后续的分派逻辑。

use crate::tags::{Tag, TagFamily};
use thiserror::Error;
use tracing::warn;

/// 标签校验过程中可能出现的错误
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TagError {
    /// 数值不对应任何已定义的枚举条目
    #[error("unrecognized {family} tag: {value}")]
    Unrecognized {
        /// 出错的标签族
        family: TagFamily,
        /// 读到的原始数值
        value: u8,
    },

    /// 需要具体取值的地方遇到了"不适用"哨兵
    #[error("{0} is not applicable here")]
    NotApplicable(TagFamily),
}

/// 把外部输入的数值解码为标签
///
/// 越界值总是返回 [`TagError::Unrecognized`],从不替换为某个有效条目。
///
/// # 示例
///
/// ```
/// use iotags::io::{decode_tag, TagError};
/// use iotags::{ByteOrder, TagFamily};
///
/// assert_eq!(decode_tag::<ByteOrder>(1), Ok(ByteOrder::LittleEndian));
/// assert_eq!(
///     decode_tag::<ByteOrder>(7),
///     Err(TagError::Unrecognized { family: TagFamily::ByteOrder, value: 7 })
/// );
/// ```
pub fn decode_tag<T: Tag>(value: u8) -> Result<T, TagError> {
    T::try_from(value).map_err(|_| {
        warn!("拒绝无法识别的{}标签: {value}", T::FAMILY);
        TagError::Unrecognized {
            family: T::FAMILY,
            value,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{CellGeometryKind, ComponentKind, EncodingMode, PixelKind};

    #[test]
    fn valid_values_decode() {
        assert_eq!(decode_tag::<PixelKind>(1), Ok(PixelKind::Scalar));
        assert_eq!(decode_tag::<ComponentKind>(13), Ok(ComponentKind::LDouble));
        assert_eq!(decode_tag::<EncodingMode>(1), Ok(EncodingMode::BINARY));
    }

    #[test]
    fn markers_are_unrecognized() {
        assert_eq!(
            decode_tag::<CellGeometryKind>(CellGeometryKind::MAX_CELLS),
            Err(TagError::Unrecognized {
                family: TagFamily::CellGeometry,
                value: 255
            })
        );
    }

    #[test]
    fn message_names_family() {
        let err = decode_tag::<ComponentKind>(200).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized component type tag: 200");
    }
}
