use super::*;

#[test]
fn parses_rows_by_cols() {
    let g: GridConfig = "3x4".parse().unwrap();
    assert_eq!((g.rows(), g.cols()), (3, 4));
    assert_eq!(g.max_canvas_width(), DEFAULT_MAX_CANVAS_WIDTH);
    assert_eq!(g.tile_count(), 12);

    let g: GridConfig = " 2X5 ".parse().unwrap();
    assert_eq!((g.rows(), g.cols()), (2, 5));
}

#[test]
fn rejects_malformed_specs() {
    for bad in ["3xa", "x3", "3x", "3", "", "3x3x3", "-1x3", "+2x3", "0x3", "3x0", "a b"] {
        let err = bad.parse::<GridConfig>().unwrap_err();
        assert!(
            matches!(err, ThumbError::InvalidConfig(_)),
            "'{bad}' gave {err:?}"
        );
    }
}

#[test]
fn rejects_overflowing_dimension() {
    let err = "99999999999x2".parse::<GridConfig>().unwrap_err();
    assert!(matches!(err, ThumbError::InvalidConfig(_)));
}

#[test]
fn zero_width_budget_is_invalid() {
    assert!(GridConfig::new(1, 1, 0).is_err());
    assert!(GridConfig::default().with_max_canvas_width(0).is_err());
    let g = GridConfig::default().with_max_canvas_width(800).unwrap();
    assert_eq!(g.max_canvas_width(), 800);
    assert_eq!(g.to_string(), "3x3");
}
