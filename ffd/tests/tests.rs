#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use ffd::config::FFDConfig;
    use ffd::io::layout_to_svg::layout_to_svg;
    use ffd::io::svg_util::SvgDrawOptions;
    use gridforge::io::ext_repr::ExtSave;
    use gridforge::io::{export, import};
    use gridforge::util::assertions;

    // a small save payload in the on-disk format: a backpack with a sword,
    // a shield and two potions, scattered by hand
    const SAVE: &str = r##"{
        "item_defs": [
            { "id": 0, "name": "Long Sword", "shape": [[1], [1], [1]], "weight": 3.5, "color": "#ef4444" },
            { "id": 1, "name": "Wooden Shield", "shape": [[1, 1], [1, 1]], "weight": 2.0, "color": "#3b82f6" },
            { "id": 2, "name": "Healing Potion", "shape": [[1]], "weight": 0.2, "color": "#ec4899" }
        ],
        "container_defs": [
            { "id": 0, "name": "Adventurer's Backpack", "shape": [[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1]], "max_weight": 10.0 },
            { "id": 1, "name": "Scroll Case", "shape": [[1, 1, 1]], "max_weight": 0.5 }
        ],
        "active_containers": [
            {
                "def_id": 0,
                "items": [
                    { "def_id": 0, "x": 3, "y": 0, "shape": [[1], [1], [1]], "rotation": 0 },
                    { "def_id": 1, "x": 0, "y": 1, "shape": [[1, 1], [1, 1]], "rotation": 0 },
                    { "def_id": 2, "x": 0, "y": 0, "shape": [[1]], "rotation": 0 },
                    { "def_id": 2, "x": 2, "y": 2, "shape": [[1]], "rotation": 0 }
                ]
            },
            { "def_id": 1, "items": [] }
        ],
        "sort_config": { "allow_rotate": true, "allow_flip": true, "start_corner": "TL" }
    }"##;

    fn read_save() -> ExtSave {
        serde_json::from_str(SAVE).expect("test save payload must parse")
    }

    #[test]
    fn full_pipeline_repacks_every_container() {
        let ext_save = read_save();
        let (mut inventory, sort_config, display_settings) = import(&ext_save).unwrap();

        let mut total_overflow = 0;
        for lkey in inventory.layouts.keys().collect_vec() {
            total_overflow += inventory.auto_sort(lkey, &sort_config).unwrap().len();
        }

        // everything fits comfortably in a 4x3 backpack
        assert_eq!(total_overflow, 0);
        assert!(assertions::inventory_is_feasible(&inventory));

        let resaved = export(&inventory, sort_config, &display_settings);
        assert_eq!(resaved.active_containers.len(), 2);
        assert_eq!(
            resaved
                .active_containers
                .iter()
                .map(|c| c.items.len())
                .sum::<usize>(),
            4
        );
    }

    #[test]
    fn repacking_twice_is_stable() {
        let ext_save = read_save();
        let (mut inventory, sort_config, display_settings) = import(&ext_save).unwrap();

        for lkey in inventory.layouts.keys().collect_vec() {
            inventory.auto_sort(lkey, &sort_config).unwrap();
        }
        let first = export(&inventory, sort_config, &display_settings);

        // a repack of an already packed inventory must not move anything
        let (mut inventory, sort_config, display_settings) = import(&first).unwrap();
        for lkey in inventory.layouts.keys().collect_vec() {
            inventory.auto_sort(lkey, &sort_config).unwrap();
        }
        let second = export(&inventory, sort_config, &display_settings);

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn layouts_render_to_svg() {
        let ext_save = read_save();
        let (inventory, _, _) = import(&ext_save).unwrap();

        for layout in inventory.layouts.values() {
            let document = layout_to_svg(layout, &inventory.catalog, SvgDrawOptions::default());
            let rendered = document.to_string();
            assert!(rendered.contains("<rect"));
            assert!(rendered.contains("viewBox"));
        }
    }

    #[test]
    fn config_parses_with_all_fields_missing() {
        let config: FFDConfig = serde_json::from_str("{}").unwrap();
        assert!(config.sort_override.is_none());
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
    }
}
