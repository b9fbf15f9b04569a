//! 区域类型分类与配色表
//!
//! 预览色（RGB）和DXF色（ACI索引）是两张独立的表，
//! 但由同一个分类函数驱动，避免两张表各自漂移。

use serde::{Deserialize, Serialize};

/// 显示颜色（RGB）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从 0xRRGGBB 创建颜色
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// 转为 "#rrggbb" 形式（预览端使用）
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 区域类型分类
///
/// 类型标签是开放的字符串域，这里只识别已知的几类，
/// 其余一律归入Default。分类是总函数，对任意输入都有结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RegionKind {
    Warning1,
    Warning2,
    Protection1,
    #[default]
    Default,
}

impl RegionKind {
    /// 从原始类型标签分类
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("Warning1") => RegionKind::Warning1,
            Some("Warning2") => RegionKind::Warning2,
            Some("Protection1") => RegionKind::Protection1,
            _ => RegionKind::Default,
        }
    }

    /// DXF颜色索引（ACI）
    pub fn aci(self) -> u8 {
        match self {
            RegionKind::Warning1 => 2,    // 黄
            RegionKind::Warning2 => 1,    // 红
            RegionKind::Protection1 => 3, // 绿
            RegionKind::Default => 7,     // 白
        }
    }

    /// 预览显示颜色
    pub fn preview_color(self) -> Color {
        match self {
            RegionKind::Warning1 => Color::from_hex(0xFFE066),
            RegionKind::Warning2 => Color::from_hex(0xFF5C5C),
            RegionKind::Protection1 => Color::from_hex(0x5CFF8D),
            RegionKind::Default => Color::from_hex(0x7ECFFF),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RegionKind::Warning1 => "Warning1",
            RegionKind::Warning2 => "Warning2",
            RegionKind::Protection1 => "Protection1",
            RegionKind::Default => "Default",
        }
    }
}
