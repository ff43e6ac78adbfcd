//! 标签文件头模块
//!
//! 把一组标签按数值(而非名字)持久化为固定长度的二进制记录,
//! 这样即使枚举变体改名,已写出的文件依然可读。
//!
//! # 布局
//!
//! | 偏移 | 长度 | 字段 |
//! |---|---|---|
//! | 0 | 4 | 魔数 `IOTG` |
//! | 4 | 1 | 版本号 |
//! | 5 | 1 | [`PixelKind`] |
//! | 6 | 1 | [`ComponentKind`] |
//! | 7 | 1 | [`EncodingMode`] |
//! | 8 | 1 | [`ByteOrder`] |
//! | 9 | 4 | 分量数,大端 `u32` |

use super::{decode_tag, Endian, TagError};
use crate::tags::{ByteOrder, ComponentKind, EncodingMode, PixelKind};
use std::fmt::Display;
use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// 文件头魔数
pub const MAGIC: [u8; 4] = *b"IOTG";

/// 当前文件头版本
pub const VERSION: u8 = 1;

/// 文件头字节长度
pub const HEADER_LEN: usize = 13;

/// 文件头内多字节字段使用的字节序
const HEADER_ENDIAN: Endian = Endian::Big;

/// 文件头解析错误
#[derive(Debug, Error)]
pub enum HeaderError {
    /// 魔数不匹配
    #[error("bad magic bytes: {0:?}")]
    BadMagic([u8; 4]),

    /// 不支持的文件头版本
    #[error("unsupported header version: {0}")]
    UnsupportedVersion(u8),

    /// 某个标签字节不属于对应的枚举
    #[error(transparent)]
    Tag(#[from] TagError),

    /// 底层 IO 错误
    #[error("header io error: {0}")]
    Io(#[from] io::Error),
}

/// 描述一段持久化像素数据的标签集合
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagHeader {
    /// 像素类型
    pub pixel: PixelKind,
    /// 分量类型
    pub component: ComponentKind,
    /// 每个像素的分量数
    pub components: u32,
    /// 编码方式
    pub encoding: EncodingMode,
    /// 负载字节序
    pub byte_order: ByteOrder,
}

impl TagHeader {
    /// 创建文件头
    ///
    /// 分量数取自 [`PixelKind::fixed_component_count`],无法确定时为 1;
    /// 编码方式和字节序默认为"不适用"。
    pub fn new(pixel: PixelKind, component: ComponentKind) -> Self {
        Self {
            pixel,
            component,
            components: pixel.fixed_component_count().unwrap_or(1),
            encoding: EncodingMode::default(),
            byte_order: ByteOrder::default(),
        }
    }

    /// 设置每个像素的分量数
    pub fn with_components(mut self, components: u32) -> Self {
        self.components = components;
        self
    }

    /// 设置编码方式
    pub fn with_encoding(mut self, encoding: EncodingMode) -> Self {
        self.encoding = encoding;
        self
    }

    /// 设置负载字节序
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// 单个像素占用的字节数,分量类型未知时为 0
    ///
    /// 分量数来自外部输入,按 `u64` 计算,在 32 位平台上也不会溢出。
    pub fn pixel_size_in_bytes(&self) -> u64 {
        u64::from(self.components) * self.component.size_in_bytes() as u64
    }

    /// 把文件头写入流
    pub fn encode<W: Write>(&self, stream: &mut W) -> io::Result<()> {
        debug!("写入文件头: {self}");
        stream.write_all(&MAGIC)?;
        stream.write_all(&[
            VERSION,
            self.pixel.into(),
            self.component.into(),
            self.encoding.into(),
            self.byte_order.into(),
        ])?;
        HEADER_ENDIAN.write(stream, self.components)
    }

    /// 编码为字节数组
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..4].copy_from_slice(&MAGIC);
        bytes[4] = VERSION;
        bytes[5] = self.pixel.into();
        bytes[6] = self.component.into();
        bytes[7] = self.encoding.into();
        bytes[8] = self.byte_order.into();
        bytes[9..].copy_from_slice(&HEADER_ENDIAN.encode(self.components));
        bytes
    }

    /// 从流中读取并校验文件头
    ///
    /// 每个标签字节都会先校验再使用,越界值返回 [`HeaderError::Tag`]。
    pub fn decode<R: Read>(stream: &mut R) -> Result<Self, HeaderError> {
        let mut magic = [0u8; 4];
        stream.read_exact(&mut magic)?;
        if magic != MAGIC {
            warn!("文件头魔数错误: {magic:?}");
            return Err(HeaderError::BadMagic(magic));
        }

        let mut fields = [0u8; 5];
        stream.read_exact(&mut fields)?;
        let [version, pixel, component, encoding, byte_order] = fields;
        if version != VERSION {
            return Err(HeaderError::UnsupportedVersion(version));
        }

        let header = Self {
            pixel: decode_tag(pixel)?,
            component: decode_tag(component)?,
            encoding: decode_tag(encoding)?,
            byte_order: decode_tag(byte_order)?,
            components: HEADER_ENDIAN.read(stream)?,
        };
        debug!("读取文件头: {header}");
        Ok(header)
    }

    /// 从字节切片解析文件头
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self, HeaderError> {
        Self::decode(&mut bytes)
    }
}

impl Display for TagHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}[{}] {} {}",
            self.pixel, self.component, self.components, self.encoding, self.byte_order
        )
    }
}
