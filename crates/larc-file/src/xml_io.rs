//! XML区域文件加载
//!
//! 输入文件形状（元素/属性名必须精确匹配，`Area`/`Region`
//! 可以嵌套在各自祖先下的任意深度）：
//!
//! ```text
//! <Root>
//!   <Area>
//!     <Region Type="Warning1">
//!       <Points>100,105,110</Points>
//!     </Region>
//!   </Area>
//! </Root>
//! ```

use crate::error::LoadError;
use larc_core::area::{parse_distances, Area, Region};
use std::path::Path;

/// 从XML文件加载区域列表
///
/// `Area`按文档顺序产出。`Points`子元素缺失或内容为空的`Region`
/// 被整体跳过（不留占位），但所在的`Area`仍会保留，可能为空。
/// 文件不可读或不是合法XML时返回[`LoadError`]。
pub fn load(path: &Path) -> Result<Vec<Area>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let doc = roxmltree::Document::parse(&text)?;

    let mut areas = Vec::new();
    for area_node in doc.descendants().filter(|n| n.has_tag_name("Area")) {
        let mut regions = Vec::new();
        for region_node in area_node.descendants().filter(|n| n.has_tag_name("Region")) {
            // Points必须是直接子元素，文本为空视同缺失
            let points_text = region_node
                .children()
                .find(|n| n.has_tag_name("Points"))
                .and_then(|n| n.text());
            let points_text = match points_text {
                Some(t) if !t.is_empty() => t,
                _ => continue,
            };

            regions.push(Region::new(
                region_node.attribute("Type").map(str::to_owned),
                parse_distances(points_text),
            ));
        }
        areas.push(Area::new(regions));
    }

    tracing::info!(
        "Loaded {} areas ({} regions) from {}",
        areas.len(),
        areas.iter().map(Area::region_count).sum::<usize>(),
        path.display()
    );

    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_xml(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).expect("Failed to create");
        file.write_all(content.as_bytes()).expect("Failed to write");
        path
    }

    #[test]
    fn test_load_basic_document() {
        let path = write_temp_xml(
            "larc_load_basic.xml",
            r#"<Root>
                <Area>
                    <Region Type="Warning1"><Points>100,105,110</Points></Region>
                    <Region Type="Protection1"><Points>50,50</Points></Region>
                </Area>
                <Area>
                    <Region><Points>7</Points></Region>
                </Area>
            </Root>"#,
        );

        let areas = load(&path).expect("Failed to load");
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].region_count(), 2);
        assert_eq!(areas[0].regions[0].region_type.as_deref(), Some("Warning1"));
        assert_eq!(areas[0].regions[0].points, vec![100, 105, 110]);
        assert_eq!(areas[0].regions[1].points, vec![50, 50]);
        // Type属性缺失时原样保留为None
        assert_eq!(areas[1].regions[0].region_type, None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_nested_elements() {
        // Area和Region允许嵌套在任意深度
        let path = write_temp_xml(
            "larc_load_nested.xml",
            r#"<Root>
                <Group>
                    <Area>
                        <Layout>
                            <Region Type="Warning2"><Points>1,2,3</Points></Region>
                        </Layout>
                    </Area>
                </Group>
            </Root>"#,
        );

        let areas = load(&path).expect("Failed to load");
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].region_count(), 1);
        assert_eq!(areas[0].regions[0].points, vec![1, 2, 3]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_drops_region_without_points() {
        // Points缺失或为空的Region被跳过，Area保留为空列表
        let path = write_temp_xml(
            "larc_load_empty_points.xml",
            r#"<Root>
                <Area>
                    <Region Type="Warning1"><Points></Points></Region>
                    <Region Type="Warning2"/>
                </Area>
            </Root>"#,
        );

        let areas = load(&path).expect("Failed to load");
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].region_count(), 0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_lenient_token_parsing() {
        let path = write_temp_xml(
            "larc_load_lenient.xml",
            r#"<Root><Area><Region><Points>10,20,abc,30,-5,40</Points></Region></Area></Root>"#,
        );

        let areas = load(&path).expect("Failed to load");
        assert_eq!(areas[0].regions[0].points, vec![10, 20, 30, 40]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("larc_does_not_exist.xml");
        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_malformed_xml() {
        let path = write_temp_xml("larc_load_malformed.xml", "<Root><Area></Root>");
        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Xml(_))));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_no_areas_is_not_an_error() {
        let path = write_temp_xml("larc_load_no_areas.xml", "<Root><Other/></Root>");
        let areas = load(&path).expect("Failed to load");
        assert!(areas.is_empty());

        std::fs::remove_file(&path).ok();
    }
}
