//! 轮廓线几何
//!
//! 区域的距离采样经过极坐标变换后得到顶点序列，
//! 这里决定它作为开放还是闭合多段线输出。

use crate::area::Region;
use crate::math::{BoundingBox2, Point2};
use crate::polar::{polar_to_cartesian, PolarParams};
use serde::{Deserialize, Serialize};

/// 多段线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Point2>,
    /// 是否闭合
    pub closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<Point2>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 线段数量
    pub fn segment_count(&self) -> usize {
        if self.vertices.len() < 2 {
            return 0;
        }
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        }
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        if self.vertices.is_empty() {
            return BoundingBox2::empty();
        }
        BoundingBox2::from_points(self.vertices.iter().copied())
    }
}

/// 端点闭合判定
///
/// 当且仅当顶点数大于2且首尾坐标逐分量精确相等时闭合。
/// 恰好两个顶点的序列永不闭合，即使端点相等。
pub fn is_closed(coords: &[Point2]) -> bool {
    coords.len() > 2 && coords[0] == coords[coords.len() - 1]
}

/// 计算区域的轮廓线
///
/// 按给定角度参数和水平偏移变换区域的全部采样点。
/// 少于2个坐标的区域没有可见几何，返回None。
/// 闭合区域保留重复的末端顶点，闭合性通过closed标志表达。
pub fn region_outline(region: &Region, params: PolarParams, offset_x: f64) -> Option<Polyline> {
    let coords = polar_to_cartesian(&region.points, params, offset_x);
    if coords.len() < 2 {
        return None;
    }
    let closed = is_closed(&coords);
    Some(Polyline::new(coords, closed))
}
