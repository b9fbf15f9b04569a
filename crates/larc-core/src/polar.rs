//! 极坐标到笛卡尔坐标变换
//!
//! 物理模型：单个旋转发射器，从起始角开始，每个距离采样后
//! 角度前进一个固定增量。第i个距离p产出点
//! `(p * cos(angle) + offset_x, p * sin(angle))`。

use crate::math::Point2;
use serde::{Deserialize, Serialize};

/// 默认起始角度（度）
pub const DEFAULT_START_ANGLE: f64 = 90.0;

/// 默认每采样角增量（度）
pub const DEFAULT_ANGLE_INCREMENT: f64 = 0.25;

/// 变换角度参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarParams {
    /// 起始角度（度）
    pub start_angle_deg: f64,
    /// 每采样角增量（度）
    pub angle_increment_deg: f64,
}

impl Default for PolarParams {
    fn default() -> Self {
        Self {
            start_angle_deg: DEFAULT_START_ANGLE,
            angle_increment_deg: DEFAULT_ANGLE_INCREMENT,
        }
    }
}

impl PolarParams {
    pub fn new(start_angle_deg: f64, angle_increment_deg: f64) -> Self {
        Self {
            start_angle_deg,
            angle_increment_deg,
        }
    }
}

/// 将距离序列转换为坐标序列
///
/// 纯函数，输出与输入等长。`offset_x` 只作用于x分量。
/// 负的或零的角度参数是合法输入，不做校验。
pub fn polar_to_cartesian(points: &[u32], params: PolarParams, offset_x: f64) -> Vec<Point2> {
    let mut angle = params.start_angle_deg.to_radians();
    let increment = params.angle_increment_deg.to_radians();

    let mut coords = Vec::with_capacity(points.len());
    for &p in points {
        let r = p as f64;
        coords.push(Point2::new(r * angle.cos() + offset_x, r * angle.sin()));
        angle += increment;
    }
    coords
}
