//! 标签消费方模块
//!
//! 注册表本身只有声明。本模块实现读写器一侧对标签的使用:
//! - [`decode_tag`]: 校验外部输入的标签数值
//! - [`Endian`]: 按具体字节序读写负载
//! - [`TagHeader`]: 把标签按数值写入/读出二进制文件头

mod endian;
mod error;
mod header;

pub use endian::Endian;
pub use error::{decode_tag, TagError};
pub use header::{HeaderError, TagHeader, HEADER_LEN, MAGIC, VERSION};
