//! 旧式平铺常量名
//!
//! 在标签枚举引入之前编写的代码直接使用不带作用域的常量名(如 `SCALAR`、`UCHAR`)。
//! 启用对应的 cargo 特性后,这些名字作为只读常量重新导出到 crate 根部:
//!
//! | 特性 | 标签族 |
//! |---|---|
//! | `legacy-pixel` | [`PixelKind`] |
//! | `legacy-component` | [`ComponentKind`] |
//! | `legacy-file` | [`EncodingMode`] |
//! | `legacy-byte-order` | [`ByteOrder`] |
//! | `legacy-cell` | [`CellGeometryKind`] |
//! | `legacy` | 以上全部 |
//!
//! 每个常量都直接绑定到枚举变体,不存在第二份数据。特性关闭时这些名字不存在,
//! 依赖它们的代码无法编译,以此推动调用方迁移。整个模块可以整体删除。

#![allow(non_upper_case_globals)]

#[allow(unused_imports)]
use crate::tags::{ByteOrder, CellGeometryKind, ComponentKind, EncodingMode, PixelKind};

/// 为一个标签族生成平铺常量以及 `(名字, 值)` 对照表
macro_rules! legacy_aliases {
    (
        $(#[$meta:meta])*
        $table:ident: $ty:ident, $note:literal {
            $($name:ident => $variant:ident),+ $(,)?
        }
    ) => {
        $(
            #[deprecated(note = $note)]
            #[doc = concat!("[`", stringify!($ty), "::", stringify!($variant), "`] 的旧式名字")]
            pub const $name: $ty = $ty::$variant;
        )+

        $(#[$meta])*
        #[allow(deprecated)]
        pub const $table: &[(&str, $ty)] = &[$((stringify!($name), $name)),+];
    };
}

#[cfg(feature = "legacy-pixel")]
legacy_aliases! {
    /// 所有旧式像素类型名
    PIXEL_ALIASES: PixelKind, "use the PixelKind variant" {
        UNKNOWNPIXELTYPE => Unknown,
        SCALAR => Scalar,
        RGB => Rgb,
        RGBA => Rgba,
        OFFSET => Offset,
        VECTOR => Vector,
        POINT => Point,
        COVARIANTVECTOR => CovariantVector,
        SYMMETRICSECONDRANKTENSOR => SymmetricSecondRankTensor,
        DIFFUSIONTENSOR3D => DiffusionTensor3D,
        COMPLEX => Complex,
        FIXEDARRAY => FixedArray,
        ARRAY => Array,
        MATRIX => Matrix,
        VARIABLELENGTHVECTOR => VariableLengthVector,
        VARIABLESIZEMATRIX => VariableSizeMatrix,
    }
}

#[cfg(feature = "legacy-component")]
legacy_aliases! {
    /// 所有旧式分量类型名
    COMPONENT_ALIASES: ComponentKind, "use the ComponentKind variant" {
        UNKNOWNCOMPONENTTYPE => Unknown,
        UCHAR => UChar,
        CHAR => Char,
        USHORT => UShort,
        SHORT => Short,
        UINT => UInt,
        INT => Int,
        ULONG => ULong,
        LONG => Long,
        ULONGLONG => ULongLong,
        LONGLONG => LongLong,
        FLOAT => Float,
        DOUBLE => Double,
        LDOUBLE => LDouble,
    }
}

#[cfg(feature = "legacy-file")]
legacy_aliases! {
    /// 所有旧式文件类型名,包含两种历史拼写
    FILE_ALIASES: EncodingMode, "use the EncodingMode variant" {
        ASCII => Ascii,
        BINARY => Binary,
        Binary => Binary,
        TYPENOTAPPLICABLE => TypeNotApplicable,
        TypeNotApplicable => TypeNotApplicable,
    }
}

#[cfg(feature = "legacy-byte-order")]
legacy_aliases! {
    /// 所有旧式字节序名
    BYTE_ORDER_ALIASES: ByteOrder, "use the ByteOrder variant" {
        BigEndian => BigEndian,
        LittleEndian => LittleEndian,
        OrderNotApplicable => OrderNotApplicable,
    }
}

#[cfg(feature = "legacy-cell")]
legacy_aliases! {
    /// 所有旧式单元几何类型名,不含两个标记值
    CELL_ALIASES: CellGeometryKind, "use the CellGeometryKind variant" {
        VERTEX_CELL => Vertex,
        LINE_CELL => Line,
        TRIANGLE_CELL => Triangle,
        QUADRILATERAL_CELL => Quadrilateral,
        POLYGON_CELL => Polygon,
        TETRAHEDRON_CELL => Tetrahedron,
        HEXAHEDRON_CELL => Hexahedron,
        QUADRATIC_EDGE_CELL => QuadraticEdge,
        QUADRATIC_TRIANGLE_CELL => QuadraticTriangle,
    }
}

/// [`CellGeometryKind::LAST_DEFINED`] 的旧式名字
#[cfg(feature = "legacy-cell")]
#[deprecated(note = "use CellGeometryKind::LAST_DEFINED")]
pub const LAST_ITK_CELL: u8 = CellGeometryKind::LAST_DEFINED;

/// [`CellGeometryKind::MAX_CELLS`] 的旧式名字
#[cfg(feature = "legacy-cell")]
#[deprecated(note = "use CellGeometryKind::MAX_CELLS")]
pub const MAX_ITK_CELLS: u8 = CellGeometryKind::MAX_CELLS;
