//! 文件操作错误定义

use thiserror::Error;

/// XML区域文件加载错误
///
/// 文件不可读或XML格式非法时产生；单个畸形数据token不是错误，
/// 由加载器静默丢弃。
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// DXF导出错误
///
/// 目标路径不可写时产生。导出失败不做部分文件清理，
/// 调用方应把失败后的目标文件视为可能损坏。
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DXF error: {0}")]
    Dxf(String),
}
