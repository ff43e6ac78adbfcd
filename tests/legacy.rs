// 运行: cargo test --features legacy
#![allow(deprecated)]
#![cfg(any(
    feature = "legacy-pixel",
    feature = "legacy-component",
    feature = "legacy-file",
    feature = "legacy-byte-order",
    feature = "legacy-cell"
))]

use iotags::*;
use std::collections::HashSet;
use strum::{EnumCount, IntoEnumIterator};

/// 对照表覆盖该标签族的每个值,且不引入新值
fn covers_family<T: Tag + IntoEnumIterator + EnumCount>(table: &[(&str, T)]) {
    let aliased: HashSet<T> = table.iter().map(|&(_, value)| value).collect();
    let defined: HashSet<T> = T::iter().collect();
    assert_eq!(aliased, defined);
    let names: HashSet<&str> = table.iter().map(|&(name, _)| name).collect();
    assert_eq!(names.len(), table.len());
}

fn assert_pairs<T: Tag>(pairs: &[(T, T)]) {
    for (alias, canonical) in pairs {
        assert_eq!(alias, canonical);
        assert_eq!(Into::<u8>::into(*alias), Into::<u8>::into(*canonical));
    }
}

#[cfg(feature = "legacy-pixel")]
#[test]
fn pixel_aliases() {
    covers_family(PIXEL_ALIASES);
    assert_pairs(&[
        (UNKNOWNPIXELTYPE, PixelKind::Unknown),
        (SCALAR, PixelKind::Scalar),
        (RGB, PixelKind::Rgb),
        (RGBA, PixelKind::Rgba),
        (OFFSET, PixelKind::Offset),
        (VECTOR, PixelKind::Vector),
        (POINT, PixelKind::Point),
        (COVARIANTVECTOR, PixelKind::CovariantVector),
        (SYMMETRICSECONDRANKTENSOR, PixelKind::SymmetricSecondRankTensor),
        (DIFFUSIONTENSOR3D, PixelKind::DiffusionTensor3D),
        (COMPLEX, PixelKind::Complex),
        (FIXEDARRAY, PixelKind::FixedArray),
        (ARRAY, PixelKind::Array),
        (MATRIX, PixelKind::Matrix),
        (VARIABLELENGTHVECTOR, PixelKind::VariableLengthVector),
        (VARIABLESIZEMATRIX, PixelKind::VariableSizeMatrix),
    ]);
    assert_eq!(PIXEL_ALIASES.len(), PixelKind::COUNT);
}

#[cfg(feature = "legacy-component")]
#[test]
fn component_aliases() {
    covers_family(COMPONENT_ALIASES);
    assert_pairs(&[
        (UNKNOWNCOMPONENTTYPE, ComponentKind::Unknown),
        (UCHAR, ComponentKind::UChar),
        (CHAR, ComponentKind::Char),
        (USHORT, ComponentKind::UShort),
        (SHORT, ComponentKind::Short),
        (UINT, ComponentKind::UInt),
        (INT, ComponentKind::Int),
        (ULONG, ComponentKind::ULong),
        (LONG, ComponentKind::Long),
        (ULONGLONG, ComponentKind::ULongLong),
        (LONGLONG, ComponentKind::LongLong),
        (FLOAT, ComponentKind::Float),
        (DOUBLE, ComponentKind::Double),
        (LDOUBLE, ComponentKind::LDouble),
    ]);
    assert_eq!(COMPONENT_ALIASES.len(), ComponentKind::COUNT);
}

#[cfg(feature = "legacy-file")]
#[test]
fn file_aliases() {
    covers_family(FILE_ALIASES);
    assert_pairs(&[
        (ASCII, EncodingMode::Ascii),
        (BINARY, EncodingMode::Binary),
        (Binary, EncodingMode::Binary),
        (TYPENOTAPPLICABLE, EncodingMode::TypeNotApplicable),
        (TypeNotApplicable, EncodingMode::TypeNotApplicable),
    ]);
    assert_pairs(&[(BINARY, Binary), (TYPENOTAPPLICABLE, TypeNotApplicable)]);
}

#[cfg(feature = "legacy-byte-order")]
#[test]
fn byte_order_aliases() {
    covers_family(BYTE_ORDER_ALIASES);
    assert_pairs(&[
        (BigEndian, ByteOrder::BigEndian),
        (LittleEndian, ByteOrder::LittleEndian),
        (OrderNotApplicable, ByteOrder::OrderNotApplicable),
    ]);
}

#[cfg(feature = "legacy-cell")]
#[test]
fn cell_aliases() {
    covers_family(CELL_ALIASES);
    assert_pairs(&[
        (VERTEX_CELL, CellGeometryKind::Vertex),
        (LINE_CELL, CellGeometryKind::Line),
        (TRIANGLE_CELL, CellGeometryKind::Triangle),
        (QUADRILATERAL_CELL, CellGeometryKind::Quadrilateral),
        (POLYGON_CELL, CellGeometryKind::Polygon),
        (TETRAHEDRON_CELL, CellGeometryKind::Tetrahedron),
        (HEXAHEDRON_CELL, CellGeometryKind::Hexahedron),
        (QUADRATIC_EDGE_CELL, CellGeometryKind::QuadraticEdge),
        (QUADRATIC_TRIANGLE_CELL, CellGeometryKind::QuadraticTriangle),
    ]);
    assert_eq!(LAST_ITK_CELL, CellGeometryKind::LAST_DEFINED);
    assert_eq!(MAX_ITK_CELLS, CellGeometryKind::MAX_CELLS);
}

#[cfg(feature = "legacy-cell")]
#[test]
fn cell_markers_keep_flat_names() {
    let last: u8 = iotags::LAST_ITK_CELL;
    let max: u8 = iotags::MAX_ITK_CELLS;
    assert_eq!(last as usize, CellGeometryKind::COUNT);
    assert!(max > last);
}

#[cfg(feature = "legacy-file")]
#[test]
fn aliases_work_in_patterns() {
    let describe = |mode: EncodingMode| match mode {
        ASCII => "ascii",
        Binary => "binary",
        TYPENOTAPPLICABLE => "n/a",
    };
    assert_eq!(describe(EncodingMode::BINARY), "binary");
    assert_eq!(describe(EncodingMode::TypeNotApplicable), "n/a");
}
