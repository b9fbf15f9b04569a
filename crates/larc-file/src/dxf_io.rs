//! DXF导出
//!
//! 每个Area沿X轴并排放置，每个可见区域导出为模型空间里的
//! 一条LWPOLYLINE，颜色取区域分类对应的ACI索引。

use crate::error::ExportError;
use larc_core::area::Area;
use larc_core::geometry::region_outline;
use larc_core::polar::PolarParams;
use std::path::Path;

/// Area之间的默认水平间距
pub const DEFAULT_SPACING_X: f64 = 5000.0;

/// 导出参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Area之间的水平间距
    pub spacing_x: f64,
    /// 变换角度参数
    pub params: PolarParams,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            spacing_x: DEFAULT_SPACING_X,
            params: PolarParams::default(),
        }
    }
}

/// 导出区域列表到DXF文件
///
/// 索引为i的Area获得 `offset_x = i * spacing_x`。
/// 少于2个坐标的区域没有几何，跳过。
/// 覆盖已存在的目标文件；目标不可写时返回[`ExportError`]，
/// 不做部分文件清理。同步阻塞调用，响应性由调用方负责。
pub fn export(areas: &[Area], path: &Path, options: &ExportOptions) -> Result<(), ExportError> {
    let mut drawing = dxf::Drawing::new();
    drawing.header.version = dxf::enums::AcadVersion::R2010;

    let mut polyline_count = 0usize;
    for (i, area) in areas.iter().enumerate() {
        let offset_x = i as f64 * options.spacing_x;
        for region in &area.regions {
            let outline = match region_outline(region, options.params, offset_x) {
                Some(outline) => outline,
                None => continue,
            };

            let mut lwpoly = dxf::entities::LwPolyline::default();
            lwpoly.set_is_closed(outline.closed);
            lwpoly.vertices = outline
                .vertices
                .iter()
                .map(|p| {
                    let mut vertex = dxf::LwPolylineVertex::default();
                    vertex.x = p.x;
                    vertex.y = p.y;
                    vertex
                })
                .collect();

            let mut entity =
                dxf::entities::Entity::new(dxf::entities::EntityType::LwPolyline(lwpoly));
            entity.common.color = dxf::Color::from_index(region.kind().aci());
            drawing.add_entity(entity);
            polyline_count += 1;
        }
    }

    drawing
        .save_file(path)
        .map_err(|e| ExportError::Dxf(e.to_string()))?;

    tracing::info!(
        "Exported {} polylines ({} areas) to {}",
        polyline_count,
        areas.len(),
        path.display()
    );

    Ok(())
}
