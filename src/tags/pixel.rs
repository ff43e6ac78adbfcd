//! 像素类型标签
//!
//! 像素类型为自动数据转换提供上下文(例如 RGB 转标量、向量转标量)。

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// 单个像素(或网格节点值)的逻辑形状
///
/// 与 [`ComponentKind`](super::ComponentKind) 组合后完整描述一个像素的二进制布局。
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
pub enum PixelKind {
    /// 未知像素类型,默认值
    #[strum(serialize = "unknown")]
    Unknown = 0,
    /// 标量
    #[strum(serialize = "scalar")]
    Scalar = 1,
    /// RGB 颜色
    #[strum(serialize = "rgb")]
    Rgb = 2,
    /// 带 alpha 通道的 RGB 颜色
    #[strum(serialize = "rgba")]
    Rgba = 3,
    /// 索引偏移量
    #[strum(serialize = "offset")]
    Offset = 4,
    /// 向量
    #[strum(serialize = "vector")]
    Vector = 5,
    /// 点
    #[strum(serialize = "point")]
    Point = 6,
    /// 协变向量(如梯度)
    #[strum(serialize = "covariant_vector")]
    CovariantVector = 7,
    /// 对称二阶张量
    #[strum(serialize = "symmetric_second_rank_tensor")]
    SymmetricSecondRankTensor = 8,
    /// 三维扩散张量
    #[strum(serialize = "diffusion_tensor_3D")]
    DiffusionTensor3D = 9,
    /// 复数
    #[strum(serialize = "complex")]
    Complex = 10,
    /// 定长数组
    #[strum(serialize = "fixed_array")]
    FixedArray = 11,
    /// 数组
    #[strum(serialize = "array")]
    Array = 12,
    /// 矩阵
    #[strum(serialize = "matrix")]
    Matrix = 13,
    /// 变长向量
    #[strum(serialize = "variable_length_vector")]
    VariableLengthVector = 14,
    /// 可变尺寸矩阵
    #[strum(serialize = "variable_size_matrix")]
    VariableSizeMatrix = 15,
}

impl Default for PixelKind {
    fn default() -> Self {
        PixelKind::Unknown
    }
}

impl PixelKind {
    /// 是否为已知像素类型
    pub const fn is_known(&self) -> bool {
        !matches!(self, PixelKind::Unknown)
    }

    /// 仅由像素类型本身决定的分量数
    ///
    /// 向量、矩阵等类型的分量数取决于空间维度或运行时长度,此时返回 `None`。
    pub const fn fixed_component_count(&self) -> Option<u32> {
        match self {
            PixelKind::Scalar => Some(1),
            PixelKind::Complex => Some(2),
            PixelKind::Rgb => Some(3),
            PixelKind::Rgba => Some(4),
            PixelKind::DiffusionTensor3D => Some(6),
            _ => None,
        }
    }
}
