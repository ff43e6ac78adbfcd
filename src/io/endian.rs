//! 字节序编解码模块
//!
//! [`ByteOrder`] 是持久化用的标签,包含"不适用"哨兵;[`Endian`] 只有两种具体取值,
//! 用于真正读写二进制负载。两者之间的转换是显式的,"不适用"不会被悄悄替换成
//! 平台字节序。

use super::TagError;
use crate::tags::{ByteOrder, ComponentKind, Tag};
use eio::{FromBytes, ReadExt, ToBytes};
use std::io::{Error, ErrorKind, Read, Result, Write};
use tracing::trace;

/// 具体字节序
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Endian {
    /// 大端字节序,高位字节在前
    Big,
    /// 小端字节序,低位字节在前
    Little,
}

impl Endian {
    /// 当前平台的字节序
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// 从流中读取 `N` 个字节并按本字节序解码
    pub fn read<const N: usize, T: FromBytes<N>>(&self, stream: &mut impl Read) -> Result<T> {
        let mut buf = [0u8; N];
        stream.read_exact(&mut buf)?;
        self.decode(buf)
    }

    /// 按本字节序解码一个值
    pub fn decode<const N: usize, T: FromBytes<N>>(&self, bytes: [u8; N]) -> Result<T> {
        match self {
            Endian::Big => bytes.as_slice().read_be(),
            Endian::Little => bytes.as_slice().read_le(),
        }
    }

    /// 把字节切片解码为值向量,长度不是 `N` 的整数倍时返回 `None`
    pub fn decode_all<const N: usize, T: FromBytes<N>>(&self, bytes: &[u8]) -> Option<Vec<T>> {
        if bytes.len() % N != 0 {
            return None;
        }
        bytes
            .chunks_exact(N)
            .map(|chunk| {
                chunk
                    .try_into()
                    .ok()
                    .and_then(|arr| self.decode::<N, T>(arr).ok())
            })
            .collect()
    }

    /// 按本字节序编码一个值
    pub fn encode<const N: usize, T: ToBytes<N>>(&self, value: T) -> [u8; N] {
        match self {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        }
    }

    /// 按本字节序把一个值写入流
    pub fn write<const N: usize, T: ToBytes<N>>(
        &self,
        stream: &mut impl Write,
        value: T,
    ) -> Result<()> {
        stream.write_all(&self.encode(value))
    }

    /// 把按本字节序存储的分量缓冲区原地转换为平台字节序
    ///
    /// # 错误
    /// * 分量类型为 `Unknown`
    /// * 缓冲区长度不是分量大小的整数倍
    pub fn swap_to_native(&self, buf: &mut [u8], component: ComponentKind) -> Result<()> {
        let size = component.size_in_bytes();
        if size == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                TagError::NotApplicable(ComponentKind::FAMILY),
            ));
        }
        if buf.len() % size != 0 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("缓冲区长度 {} 不是 {component} 大小 {size} 的整数倍", buf.len()),
            ));
        }
        if *self == Endian::native() || size == 1 {
            return Ok(());
        }
        trace!("交换 {} 个 {component} 分量的字节序", buf.len() / size);
        buf.chunks_exact_mut(size).for_each(|chunk| chunk.reverse());
        Ok(())
    }
}

impl TryFrom<ByteOrder> for Endian {
    type Error = TagError;

    fn try_from(order: ByteOrder) -> std::result::Result<Self, Self::Error> {
        match order {
            ByteOrder::BigEndian => Ok(Endian::Big),
            ByteOrder::LittleEndian => Ok(Endian::Little),
            ByteOrder::OrderNotApplicable => Err(TagError::NotApplicable(ByteOrder::FAMILY)),
        }
    }
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Big => ByteOrder::BigEndian,
            Endian::Little => ByteOrder::LittleEndian,
        }
    }
}
