//! 区域数据模型
//!
//! 一个激光区域文件包含多个 `Area`，每个 `Area` 包含多个 `Region`。
//! 采样点在区域内的顺序、区域在Area内的顺序、Area在文件内的顺序
//! 都编码了激光机构的物理扫描顺序，必须端到端保持。

use serde::{Deserialize, Serialize};

/// 一个独立的激光切割布局单元
///
/// 导出时每个Area沿X轴获得自己的水平偏移。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Area {
    pub regions: Vec<Region>,
}

impl Area {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Area内的一个子形状，共享同一类型分类
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// 原始类型标签，解析时原样保留（缺失为None）
    ///
    /// 分类到已知类型在渲染/导出时进行，见 [`crate::color::RegionKind`]。
    pub region_type: Option<String>,
    /// 极坐标距离采样，按扫描角度顺序
    pub points: Vec<u32>,
}

impl Region {
    pub fn new(region_type: Option<String>, points: Vec<u32>) -> Self {
        Self { region_type, points }
    }

    /// 区域类型分类（未识别/缺失回退到Default）
    pub fn kind(&self) -> crate::color::RegionKind {
        crate::color::RegionKind::from_tag(self.region_type.as_deref())
    }
}

/// 解析逗号分隔的距离列表
///
/// 宽容解析策略：先过滤再转换。仅保留去除首尾空白后完全由
/// 十进制数字组成的token，其余（空串、负号、小数点、字母）静默丢弃，
/// 不产生错误。保留顺序。
pub fn parse_distances(text: &str) -> Vec<u32> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}
