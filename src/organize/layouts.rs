//! Layout units from auto-layout containers and grid declarations.

use crate::document::{AxisAlign, DesignDocument, DesignNode, LayoutMode};
use crate::types::{GridInfo, LayoutKind, LayoutRecord};

/// Record every raw node with a non-none layout mode or a layout grid.
pub fn extract_layouts(doc: &DesignDocument) -> Vec<LayoutRecord> {
    let mut records = Vec::new();
    for root in doc.roots() {
        root.walk(&mut |node| {
            if let Some(record) = layout_record(node) {
                records.push(record);
            }
        });
    }
    records
}

fn layout_record(node: &DesignNode) -> Option<LayoutRecord> {
    if node.layout_mode != LayoutMode::None {
        return Some(LayoutRecord {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: match node.layout_mode {
                LayoutMode::Horizontal => LayoutKind::Row,
                _ => LayoutKind::Column,
            },
            align: node.primary_axis_align_items.map(align_name),
            gap: node.item_spacing,
            padding: padding_value(node),
            grid: None,
        });
    }

    // Only the first grid definition is read; combined row+column grids on
    // one node are not supported.
    if let Some(grid) = node.layout_grids.first() {
        let mut info = GridInfo {
            cell_size: grid.section_size,
            gutter: grid.gutter_size,
            ..GridInfo::default()
        };
        match grid.pattern.to_uppercase().as_str() {
            "COLUMNS" => info.column_count = grid.count,
            "ROWS" => info.row_count = grid.count,
            _ => {
                info.column_count = grid.count;
                info.row_count = grid.count;
            }
        }
        return Some(LayoutRecord {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: LayoutKind::Grid,
            align: None,
            gap: grid.gutter_size,
            padding: padding_value(node),
            grid: Some(info),
        });
    }

    None
}

fn align_name(align: AxisAlign) -> String {
    match align {
        AxisAlign::Min => "start",
        AxisAlign::Center => "center",
        AxisAlign::Max => "end",
        AxisAlign::SpaceBetween => "space-between",
        AxisAlign::Other => "start",
    }
    .to_string()
}

fn padding_value(node: &DesignNode) -> Option<String> {
    let pad = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    if pad.iter().all(Option::is_none) {
        return None;
    }
    let sides: Vec<String> = pad
        .iter()
        .map(|p| format!("{}px", p.unwrap_or(0.0).round() as i64))
        .collect();
    Some(sides.join(" "))
}
