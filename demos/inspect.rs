// 读取并打印标签文件头;未提供路径时生成一个示例文件头
use iotags::io::TagHeader;
use iotags::{ByteOrder, ComponentKind, EncodingMode, PixelKind};
use std::env;
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Example: iotags inspect");

    let header = match env::args().nth(1) {
        Some(path) => {
            println!("Opening `{path}`");
            let file = File::open(&path).unwrap();
            let reader = &mut BufReader::new(file);
            TagHeader::decode(reader).unwrap()
        }
        None => TagHeader::new(PixelKind::Rgb, ComponentKind::UChar)
            .with_encoding(EncodingMode::Binary)
            .with_byte_order(ByteOrder::LittleEndian),
    };

    println!("Header: {header}");
    println!("Bytes:  {:02X?}", header.to_bytes());
    println!("Pixel size: {} bytes", header.pixel_size_in_bytes());
}
