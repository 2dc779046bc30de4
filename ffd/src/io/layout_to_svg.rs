use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use gridforge::entities::{Catalog, Layout};
use gridforge::geometry::Cell;

use crate::io::svg_util::{self, SvgDrawOptions};

/// Renders a layout (container footprint plus placed items) to an SVG
/// document. An overweight container gets a warning outline.
pub fn layout_to_svg(layout: &Layout, catalog: &Catalog, options: SvgDrawOptions) -> Document {
    let cdef = catalog
        .container_def(layout.def_id)
        .expect("layout references a missing container definition");
    let theme = options.theme.get_theme();

    let stride = options.cell_size + options.gap;
    let width = cdef.footprint.n_cols() as f32 * stride + options.gap;
    let height = cdef.footprint.n_rows() as f32 * stride + options.gap;

    let cell_rect = |cell: Cell| -> Rectangle {
        Rectangle::new()
            .set("x", options.gap + cell.x() as f32 * stride)
            .set("y", options.gap + cell.y() as f32 * stride)
            .set("width", options.cell_size)
            .set("height", options.cell_size)
    };

    //draw the container: backdrop plus one rect per usable footprint cell
    let container_group = {
        let mut container_group = Group::new()
            .set("id", format!("container_{}", cdef.id))
            .add(Title::new(format!(
                "container, def: {} ({}), {}x{}",
                cdef.id,
                cdef.name,
                cdef.footprint.n_cols(),
                cdef.footprint.n_rows()
            )))
            .add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", theme.backdrop_fill),
            );

        for cell in cdef.footprint.occupied_cells(Cell(0, 0)) {
            container_group = container_group.add(
                cell_rect(cell)
                    .set("fill", theme.footprint_fill)
                    .set("stroke", theme.footprint_stroke)
                    .set("stroke-width", theme.stroke_width),
            );
        }
        container_group
    };

    //draw the items, one group per placed item, in its definition's color
    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        for pi in layout.placed_items.values() {
            let color = match catalog.item_def(pi.def_id) {
                Some(def) => def.color.clone(),
                None => theme.footprint_stroke.to_string(),
            };
            let stroke = svg_util::change_brightness(&color, 0.6);

            let mut item_group = Group::new();
            if let Some(def) = catalog.item_def(pi.def_id) {
                item_group = item_group.add(Title::new(format!(
                    "item, def: {} ({}), origin: {}, rotation: {}",
                    def.id, def.name, pi.origin, pi.rotation
                )));
            }
            for cell in pi.shape.occupied_cells(pi.origin) {
                item_group = item_group.add(
                    cell_rect(cell)
                        .set("fill", color.as_str())
                        .set("stroke", stroke.as_str())
                        .set("stroke-width", theme.stroke_width),
                );
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .add(container_group)
        .add(items_group);

    let overweight = match cdef.max_weight {
        Some(max_weight) => layout.total_weight(catalog) > max_weight,
        None => false,
    };
    if overweight {
        document = document.add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", width)
                .set("height", height)
                .set("fill", "none")
                .set("stroke", theme.overweight_stroke)
                .set("stroke-width", 2.0 * theme.stroke_width),
        );
    }

    document
}
