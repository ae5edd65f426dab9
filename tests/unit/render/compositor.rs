use super::*;
use crate::{
    layout::{grid::GridConfig, plan::LayoutSettings},
    media::metadata::VideoMetadata,
};

fn small_plan(rows: u32, cols: u32) -> LayoutPlan {
    let meta = VideoMetadata::new("clip.mp4", 160, 90, 30.0, 300, 1);
    let grid = GridConfig::new(rows, cols, 400).unwrap();
    LayoutPlan::compute(&meta, &grid, &LayoutSettings::default()).unwrap()
}

fn solid_tile(plan: &LayoutPlan, grid_index: usize, rgb: [u8; 3]) -> PlacedTile {
    PlacedTile {
        grid_index,
        tile: Surface::new_filled(
            plan.frame_width,
            plan.frame_height,
            [rgb[0], rgb[1], rgb[2], 255],
        ),
    }
}

fn blank_layers(plan: &LayoutPlan) -> (Surface, Surface) {
    (
        Surface::new_filled(plan.grid_width, plan.info_height, [255, 255, 255, 255]),
        Surface::new_transparent(plan.grid_width, plan.total_height),
    )
}

#[test]
fn canvas_has_plan_dimensions() {
    let plan = small_plan(2, 2);
    let (panel, watermark) = blank_layers(&plan);
    let img = compose_canvas(&plan, &panel, &[], &watermark).unwrap();
    assert_eq!(img.dimensions(), (plan.grid_width, plan.total_height));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn tiles_land_at_row_major_origins_regardless_of_arrival_order() {
    let plan = small_plan(2, 3);
    let (panel, watermark) = blank_layers(&plan);
    let colours = [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
        [0, 255, 255],
        [255, 0, 255],
    ];
    let mut tiles: Vec<PlacedTile> = colours
        .iter()
        .enumerate()
        .map(|(i, c)| solid_tile(&plan, i, *c))
        .collect();
    tiles.reverse();

    let img = compose_canvas(&plan, &panel, &tiles, &watermark).unwrap();
    for (k, c) in colours.iter().enumerate() {
        let row = (k / 3) as u32;
        let col = (k % 3) as u32;
        let x = plan.padding + col * (plan.frame_width + plan.spacing);
        let y = plan.info_height + row * (plan.frame_height + plan.spacing);
        assert_eq!(img.get_pixel(x, y).0, *c, "tile {k} top-left");
        assert_eq!(
            img.get_pixel(x + plan.frame_width - 1, y + plan.frame_height - 1).0,
            *c,
            "tile {k} bottom-right"
        );
    }
    // Gap between the first two tiles stays white.
    let gap_x = plan.padding + plan.frame_width;
    assert_eq!(img.get_pixel(gap_x, plan.info_height).0, [255, 255, 255]);
}

#[test]
fn missing_cells_stay_white() {
    let plan = small_plan(1, 3);
    let (panel, watermark) = blank_layers(&plan);
    let tiles = vec![solid_tile(&plan, 0, [0, 0, 0]), solid_tile(&plan, 2, [0, 0, 0])];
    let img = compose_canvas(&plan, &panel, &tiles, &watermark).unwrap();

    let (x1, y1) = plan.tile_origin(1);
    assert_eq!(img.get_pixel(x1 + 1, y1 + 1).0, [255, 255, 255]);
    let (x2, y2) = plan.tile_origin(2);
    assert_eq!(img.get_pixel(x2 + 1, y2 + 1).0, [0, 0, 0]);
}

#[test]
fn watermark_is_composited_last() {
    let plan = small_plan(1, 1);
    let panel = Surface::new_filled(plan.grid_width, plan.info_height, [255, 255, 255, 255]);
    let mut watermark = Surface::new_transparent(plan.grid_width, plan.total_height);
    let (x, y) = plan.tile_origin(0);
    watermark.fill_rect(i64::from(x), i64::from(y), 1, 1, [0, 0, 0, 153]);

    let tiles = vec![solid_tile(&plan, 0, [255, 255, 255])];
    let img = compose_canvas(&plan, &panel, &tiles, &watermark).unwrap();
    assert_eq!(img.get_pixel(x, y).0, [102, 102, 102]);
}

#[test]
fn mismatched_layers_are_rejected() {
    let plan = small_plan(1, 2);
    let (panel, watermark) = blank_layers(&plan);

    let wrong_panel = Surface::new_transparent(plan.grid_width, plan.info_height + 1);
    assert!(compose_canvas(&plan, &wrong_panel, &[], &watermark).is_err());

    let wrong_tile = PlacedTile {
        grid_index: 0,
        tile: Surface::new_transparent(plan.frame_width + 1, plan.frame_height),
    };
    assert!(compose_canvas(&plan, &panel, &[wrong_tile], &watermark).is_err());

    let out_of_grid = solid_tile(&plan, 2, [0, 0, 0]);
    let err = compose_canvas(&plan, &panel, &[out_of_grid], &watermark).unwrap_err();
    assert!(matches!(err, ThumbError::Render(_)));
}
