//! 网格单元查找表
//!
//! 单元工厂按 [`CellGeometryKind`] 分派构造策略。查找表按
//! [`CellGeometryKind::MAX_CELLS`] 分配槽位,用几何类型的数值直接索引。

use crate::tags::CellGeometryKind;
use tracing::debug;

/// 以单元几何类型为键的定长查找表
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellTable<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> CellTable<T> {
    /// 槽位数
    pub const CAPACITY: usize = CellGeometryKind::MAX_CELLS as usize;

    /// 创建空表
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(Self::CAPACITY).collect(),
            len: 0,
        }
    }

    /// 插入条目,返回被替换的旧值
    pub fn insert(&mut self, kind: CellGeometryKind, value: T) -> Option<T> {
        let previous = self.slots[Self::index(kind)].replace(value);
        match previous {
            Some(_) => debug!("替换单元查找表条目: {kind}"),
            None => self.len += 1,
        }
        previous
    }

    /// 获取条目
    pub fn get(&self, kind: CellGeometryKind) -> Option<&T> {
        self.slots[Self::index(kind)].as_ref()
    }

    /// 获取可变条目
    pub fn get_mut(&mut self, kind: CellGeometryKind) -> Option<&mut T> {
        self.slots[Self::index(kind)].as_mut()
    }

    /// 移除条目
    pub fn remove(&mut self, kind: CellGeometryKind) -> Option<T> {
        let removed = self.slots[Self::index(kind)].take();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// 是否已注册该几何类型
    pub fn contains(&self, kind: CellGeometryKind) -> bool {
        self.get(kind).is_some()
    }

    /// 已注册条目数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否没有任何条目
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 按几何类型数值升序遍历已注册的条目
    pub fn iter(&self) -> impl Iterator<Item = (CellGeometryKind, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let kind = u8::try_from(i)
                .ok()
                .and_then(|v| CellGeometryKind::try_from(v).ok())?;
            slot.as_ref().map(|value| (kind, value))
        })
    }

    fn index(kind: CellGeometryKind) -> usize {
        u8::from(kind) as usize
    }
}

impl<T> Default for CellTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(CellGeometryKind, T)> for CellTable<T> {
    fn from_iter<I: IntoIterator<Item = (CellGeometryKind, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kind, value) in iter {
            table.insert(kind, value);
        }
        table
    }
}
