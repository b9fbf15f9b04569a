//! LARC 核心几何引擎
//!
//! 将激光区域文件中的极坐标距离采样转换为2D笛卡尔几何。
//!
//! # 架构设计
//!
//! 数据沿单向管线流动：
//! - `Area` / `Region`: 从XML加载的原始区域数据（保持文档顺序）
//! - `polar_to_cartesian`: 旋转射线模型，距离序列 → 坐标序列
//! - `Polyline`: 可导出/可渲染的轮廓线（含闭合判定）
//! - `RegionKind`: 区域类型分类，驱动预览色和DXF色两张配色表
//!
//! # 示例
//!
//! ```rust
//! use larc_core::prelude::*;
//!
//! // 一个区域的距离采样
//! let region = Region::new(Some("Warning1".to_string()), vec![100, 105, 110]);
//!
//! // 计算轮廓线
//! let outline = region_outline(&region, PolarParams::default(), 0.0).unwrap();
//! assert_eq!(outline.vertex_count(), 3);
//! ```

pub mod area;
pub mod color;
pub mod geometry;
pub mod math;
pub mod polar;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::area::{parse_distances, Area, Region};
    pub use crate::color::{Color, RegionKind};
    pub use crate::geometry::{is_closed, region_outline, Polyline};
    pub use crate::math::{BoundingBox2, Point2, Vector2};
    pub use crate::polar::{
        polar_to_cartesian, PolarParams, DEFAULT_ANGLE_INCREMENT, DEFAULT_START_ANGLE,
    };
}
