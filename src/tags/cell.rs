//! 网格单元几何类型标签

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// 网格单元的拓扑形状
///
/// 两个标记值不是几何类型,因此不作为变体出现,解码 9 或 255 都会失败:
/// - [`CellGeometryKind::LAST_DEFINED`]: 已定义几何类型的数量
/// - [`CellGeometryKind::MAX_CELLS`]: 查找表尺寸上限
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
#[strum(serialize_all = "snake_case")]
pub enum CellGeometryKind {
    /// 顶点
    Vertex = 0,
    /// 线段
    Line = 1,
    /// 三角形
    Triangle = 2,
    /// 四边形
    Quadrilateral = 3,
    /// 任意多边形
    Polygon = 4,
    /// 四面体
    Tetrahedron = 5,
    /// 六面体
    Hexahedron = 6,
    /// 二次边
    QuadraticEdge = 7,
    /// 二次三角形
    QuadraticTriangle = 8,
}

impl CellGeometryKind {
    /// 最后一个已定义几何类型之后的值,等于已定义几何类型的数量
    pub const LAST_DEFINED: u8 = 9;

    /// 单元查找表的尺寸上限,严格大于任何几何类型的值
    pub const MAX_CELLS: u8 = 255;

    /// 单元的点数,多边形的点数可变,返回 `None`
    pub const fn number_of_points(&self) -> Option<u32> {
        match self {
            CellGeometryKind::Vertex => Some(1),
            CellGeometryKind::Line => Some(2),
            CellGeometryKind::Triangle => Some(3),
            CellGeometryKind::Quadrilateral => Some(4),
            CellGeometryKind::Polygon => None,
            CellGeometryKind::Tetrahedron => Some(4),
            CellGeometryKind::Hexahedron => Some(8),
            CellGeometryKind::QuadraticEdge => Some(3),
            CellGeometryKind::QuadraticTriangle => Some(6),
        }
    }

    /// 拓扑维度
    pub const fn dimension(&self) -> u32 {
        match self {
            CellGeometryKind::Vertex => 0,
            CellGeometryKind::Line | CellGeometryKind::QuadraticEdge => 1,
            CellGeometryKind::Triangle
            | CellGeometryKind::Quadrilateral
            | CellGeometryKind::Polygon
            | CellGeometryKind::QuadraticTriangle => 2,
            CellGeometryKind::Tetrahedron | CellGeometryKind::Hexahedron => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn last_defined_counts_geometries() {
        assert_eq!(CellGeometryKind::LAST_DEFINED as usize, CellGeometryKind::COUNT);
        let last = CellGeometryKind::iter().last().map(u8::from);
        assert_eq!(last, Some(CellGeometryKind::LAST_DEFINED - 1));
    }

    #[test]
    fn markers_are_not_geometries() {
        assert!(CellGeometryKind::try_from(CellGeometryKind::LAST_DEFINED).is_err());
        assert!(CellGeometryKind::try_from(CellGeometryKind::MAX_CELLS).is_err());
        assert!(CellGeometryKind::iter().all(|kind| u8::from(kind) < CellGeometryKind::MAX_CELLS));
    }

    #[test]
    fn points_and_dimensions() {
        assert_eq!(CellGeometryKind::Hexahedron.number_of_points(), Some(8));
        assert_eq!(CellGeometryKind::QuadraticTriangle.number_of_points(), Some(6));
        assert_eq!(CellGeometryKind::Polygon.number_of_points(), None);
        assert_eq!(CellGeometryKind::QuadraticEdge.dimension(), 1);
        assert_eq!(CellGeometryKind::Tetrahedron.dimension(), 3);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(CellGeometryKind::QuadraticEdge.to_string(), "quadratic_edge");
        assert_eq!("hexahedron".parse::<CellGeometryKind>(), Ok(CellGeometryKind::Hexahedron));
    }
}
