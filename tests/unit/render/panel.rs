use super::*;
use crate::{
    layout::{grid::GridConfig, plan::LayoutSettings},
    text::fonts::{FontCandidates, FontProvider, FontRole},
};

fn hd_plan() -> (VideoMetadata, LayoutPlan) {
    let meta = VideoMetadata::new("clip.mp4", 1920, 1080, 30.0, 300, 5 * 1024 * 1024);
    let plan =
        LayoutPlan::compute(&meta, &GridConfig::default(), &LayoutSettings::default()).unwrap();
    (meta, plan)
}

#[test]
fn panel_is_blank_without_a_shaper() {
    let (meta, plan) = hd_plan();
    let panel = render_info_panel(&meta, &plan, None).unwrap();
    assert_eq!((panel.width(), panel.height()), (plan.grid_width, plan.info_height));
    assert!(panel
        .data()
        .chunks_exact(4)
        .all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn panel_text_stays_inside_left_margin_and_line_block() {
    let face = FontProvider::system(FontCandidates::default()).resolve(FontRole::Regular);
    let mut shaper = TextShaper::new(&face).unwrap();
    let (meta, plan) = hd_plan();
    let panel = render_info_panel(&meta, &plan, Some(&mut shaper)).unwrap();
    assert_eq!((panel.width(), panel.height()), (plan.grid_width, plan.info_height));

    let mut inked = 0;
    for y in 0..panel.height() {
        for x in 0..panel.width() {
            let px = panel.pixel(x, y).unwrap();
            if px != [255, 255, 255, 255] {
                inked += 1;
                assert!(x + 3 >= plan.padding, "ink left of the margin at {x},{y}");
                assert!(y + 3 >= plan.padding, "ink above the first line at {x},{y}");
            }
        }
    }
    assert!(inked > 0);
}

#[test]
fn bundled_face_still_writes_the_info_lines() {
    let face = FontProvider::empty(FontCandidates::default()).resolve(FontRole::Regular);
    let mut shaper = TextShaper::new(&face).unwrap();
    let (meta, plan) = hd_plan();
    let panel = render_info_panel(&meta, &plan, Some(&mut shaper)).unwrap();

    let lines_inked = (0..5u32)
        .filter(|i| {
            let top = plan.padding + i * plan.line_spacing;
            let bottom = (top + plan.line_spacing).min(plan.info_height);
            (top..bottom).any(|y| {
                (0..panel.width()).any(|x| panel.pixel(x, y).is_some_and(|px| px[0] < 128))
            })
        })
        .count();
    assert_eq!(lines_inked, 5);
}
