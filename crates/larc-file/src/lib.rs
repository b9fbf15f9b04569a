//! LARC 文件格式处理
//!
//! 支持：
//! - XML 区域文件加载
//! - DXF 导出（每个可见区域一条LWPOLYLINE）

pub mod dxf_io;
pub mod error;
pub mod xml_io;

pub use dxf_io::{export, ExportOptions, DEFAULT_SPACING_X};
pub use error::{ExportError, LoadError};
pub use xml_io::load;
