use selectbox::{
    hit_test, layout, options_from, render_to_buffer, Buffer, Color, Element, LayoutResult, Rect,
    Rgb, SelectConfig, SelectController, SelectOption, SelectValue,
};

fn abc() -> Vec<SelectOption> {
    options_from([(1, "One"), (2, "Two"), (3, "Three")])
}

fn select(id: &str, value: SelectValue) -> SelectController {
    SelectController::new(SelectConfig::new(abc()).id(id), value, |_| {})
}

fn draw(root: &Element) -> (Buffer, LayoutResult) {
    let result = layout(root, Rect::from_size(40, 20));
    let mut buf = Buffer::new(40, 20);
    render_to_buffer(root, &result, &mut buf);
    (buf, result)
}

// ============================================================================
// Closed control
// ============================================================================

#[test]
fn test_closed_single_row() {
    let opts = abc();
    let select = select("fruit", SelectValue::Single(Some(opts[1].clone())));
    let (buf, _) = draw(&select.view());

    assert!(buf.row_text(0).starts_with('╭'));
    let row = buf.row_text(1);
    assert!(row.starts_with("│ Two"), "row was {row:?}");
    assert!(row.ends_with("× │ ▼ │"), "row was {row:?}");
    assert!(buf.row_text(2).starts_with('╰'));

    // No list below a closed control
    assert_eq!(buf.row_text(3), "");
}

#[test]
fn test_placeholder_when_empty() {
    let select = select("fruit", SelectValue::Multiple(Vec::new()));
    let (buf, _) = draw(&select.view());
    assert!(buf.row_text(1).starts_with("│ Select..."));

    let config = SelectConfig::new(abc()).id("veg").placeholder("Pick one");
    let select = SelectController::new(config, SelectValue::Single(None), |_| {});
    let (buf, _) = draw(&select.view());
    assert!(buf.row_text(1).starts_with("│ Pick one"));

    // Placeholder text is dimmed
    assert!(buf.get(2, 1).unwrap().style.dim);
}

#[test]
fn test_long_label_truncated() {
    let long = SelectOption::new("A very long label", 1);
    let select = SelectController::new(
        SelectConfig::new(vec![long.clone()]).id("fruit"),
        SelectValue::Single(Some(long)),
        |_| {},
    );
    let (buf, _) = draw(&select.view());
    let row = buf.row_text(1);
    assert!(row.starts_with("│ A very lo…"), "row was {row:?}");
    assert!(row.ends_with("× │ ▼ │"), "row was {row:?}");
}

#[test]
fn test_badges_for_multiple() {
    let opts = abc();
    let select = SelectController::new(
        SelectConfig::new(abc()).id("fruit").width(30),
        SelectValue::Multiple(vec![opts[0].clone(), opts[2].clone()]),
        |_| {},
    );
    let (buf, result) = draw(&select.view());

    let row = buf.row_text(1);
    assert!(row.starts_with("│ One × Three ×"), "row was {row:?}");
    assert!(row.ends_with("× │ ▼ │"), "row was {row:?}");
    assert!(result.contains_key("fruit-badge-0"));
    assert!(result.contains_key("fruit-badge-1"));
}

#[test]
fn test_badges_wrap_onto_new_lines() {
    let opts = abc();
    let mut select = select("m", SelectValue::Multiple(opts.clone()));
    let root = select.view();
    let (buf, result) = draw(&root);

    // Each badge gets a line of its own at the default width
    assert_eq!(select.body_height(), 5);
    let first = buf.row_text(1);
    assert!(first.starts_with("│ One ×"), "row was {first:?}");
    assert!(first.ends_with("× │ ▼ │"), "row was {first:?}");
    assert!(buf.row_text(2).starts_with("│ Two ×"));
    assert!(buf.row_text(3).starts_with("│ Three ×"));
    assert!(buf.row_text(4).starts_with('╰'));

    assert_eq!(result["m-badge-1"], Rect::new(2, 2, 5, 1));
    assert_eq!(result["m-badge-2"], Rect::new(2, 3, 7, 1));
    assert_eq!(hit_test(&result, &root, 8, 3), Some("m-badge-2".into()));

    // The open list starts below the grown body
    select.toggle_open();
    let (buf, result) = draw(&select.view());
    assert_eq!(result["m-options"].y, 5);
    assert!(buf.row_text(6).starts_with("│ One"));
}

#[test]
fn test_badges_share_a_line_when_they_fit() {
    let opts = abc();
    let select = SelectController::new(
        SelectConfig::new(abc()).id("m").width(24),
        SelectValue::Multiple(opts.clone()),
        |_| {},
    );
    let (buf, _) = draw(&select.view());

    assert_eq!(select.body_height(), 4);
    assert!(buf.row_text(1).starts_with("│ One × Two ×"));
    assert!(buf.row_text(2).starts_with("│ Three ×"));
}

// ============================================================================
// Open control
// ============================================================================

#[test]
fn test_open_list_rows() {
    let opts = abc();
    let mut select = select("fruit", SelectValue::Single(Some(opts[1].clone())));
    select.toggle_open();
    let (buf, result) = draw(&select.view());

    assert!(buf.row_text(1).ends_with("× │ ▲ │"));
    assert!(buf.row_text(3).starts_with('┌'));
    assert!(buf.row_text(4).starts_with("│ One"));
    assert!(buf.row_text(5).starts_with("│ Two"));
    assert!(buf.row_text(6).starts_with("│ Three"));
    assert!(buf.row_text(7).starts_with('└'));

    assert_eq!(result["fruit-options"], Rect::new(0, 3, 20, 5));

    // The selected option is drawn bold in the selected color
    let cell = buf.get(2, 5).unwrap();
    assert!(cell.style.bold);
    assert_eq!(cell.fg, Color::hex(0x7575e6).to_rgb());
}

#[test]
fn test_list_capped_at_max_visible() {
    let options: Vec<SelectOption> = (1..=8)
        .map(|n| SelectOption::new(format!("Item {n}"), n))
        .collect();
    let config = SelectConfig::new(options).id("long").max_visible(3);
    let mut select = SelectController::new(config, SelectValue::Single(None), |_| {});
    select.toggle_open();

    let root = select.view();
    let (buf, result) = draw(&root);
    assert_eq!(result["long-options"].height, 5);
    assert!(result.contains_key("long-opt-2"));
    assert!(!result.contains_key("long-opt-3"));
    assert!(buf.row_text(4).starts_with("│ Item 1"));

    select.scroll_by(2);
    let (buf, result) = draw(&select.view());
    assert!(!result.contains_key("long-opt-1"));
    assert!(result.contains_key("long-opt-4"));
    assert!(buf.row_text(4).starts_with("│ Item 3"));
}

#[test]
fn test_hovered_option_highlighted() {
    let mut select = select("fruit", SelectValue::Single(None));
    select.toggle_open();
    let root = select.view();

    select.dispatch(
        &root,
        &selectbox::Event::MouseMove {
            target: Some("fruit-opt-1".into()),
            x: 3,
            y: 5,
        },
    );
    let (buf, _) = draw(&select.view());

    let cell = buf.get(2, 5).unwrap();
    assert_eq!(cell.bg, Rgb::new(0x50, 0x50, 0xdb));
    assert_eq!(cell.fg, Rgb::new(255, 255, 255));
    assert_ne!(buf.get(2, 4).unwrap().bg, Rgb::new(0x50, 0x50, 0xdb));
}

#[test]
fn test_focused_border_color() {
    let mut select = select("fruit", SelectValue::Single(None));
    let (buf, _) = draw(&select.view());
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(0x77, 0x77, 0x77));

    let root = select.view();
    select.dispatch(
        &root,
        &selectbox::Event::Focus {
            target: "fruit".into(),
        },
    );
    let (buf, _) = draw(&select.view());
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(0, 0, 255));
}

#[test]
fn test_disabled_text_dimmed() {
    let opts = abc();
    let config = SelectConfig::new(abc()).id("fruit").disabled(true);
    let select = SelectController::new(config, SelectValue::Single(Some(opts[0].clone())), |_| {});
    let root = select.view();
    let (buf, result) = draw(&root);

    assert!(buf.get(2, 1).unwrap().style.dim);
    assert_eq!(hit_test(&result, &root, 13, 1), None);
    assert_eq!(hit_test(&result, &root, 5, 1), None);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_body_parts() {
    let opts = abc();
    let select = select("fruit", SelectValue::Single(Some(opts[0].clone())));
    let root = select.view();
    let (_, result) = draw(&root);

    assert_eq!(hit_test(&result, &root, 13, 1), Some("fruit-clear".into()));
    // Caret and value text are not clickable themselves
    assert_eq!(hit_test(&result, &root, 17, 1), Some("fruit".into()));
    assert_eq!(hit_test(&result, &root, 3, 1), Some("fruit".into()));
    assert_eq!(hit_test(&result, &root, 0, 0), Some("fruit".into()));
    assert_eq!(hit_test(&result, &root, 25, 1), None);
}

#[test]
fn test_hit_badge() {
    let opts = abc();
    let select = select("fruit", SelectValue::Multiple(vec![opts[0].clone()]));
    let root = select.view();
    let (_, result) = draw(&root);

    assert_eq!(hit_test(&result, &root, 3, 1), Some("fruit-badge-0".into()));
}

#[test]
fn test_hit_option_rows() {
    let mut select = select("fruit", SelectValue::Single(None));
    select.toggle_open();
    let root = select.view();
    let (_, result) = draw(&root);

    assert_eq!(hit_test(&result, &root, 3, 4), Some("fruit-opt-0".into()));
    assert_eq!(hit_test(&result, &root, 3, 5), Some("fruit-opt-1".into()));
    // List border belongs to the list frame
    assert_eq!(hit_test(&result, &root, 0, 4), Some("fruit-options".into()));
}

#[test]
fn test_open_list_covers_next_control() {
    let mut a = select("a", SelectValue::Single(None));
    let b = select("b", SelectValue::Single(None));
    a.toggle_open();

    let root = Element::col().child(a.view()).child(b.view());
    let (buf, result) = draw(&root);

    assert_eq!(result["b"].y, 3);
    assert_eq!(hit_test(&result, &root, 3, 4), Some("a-opt-0".into()));
    assert!(buf.row_text(4).starts_with("│ One"));

    // With the list closed the same point hits the second control
    a.close();
    let root = Element::col().child(a.view()).child(b.view());
    let (_, result) = draw(&root);
    assert_eq!(hit_test(&result, &root, 3, 4), Some("b".into()));
}

// ============================================================================
// Theme colors
// ============================================================================

#[test]
fn test_hsl_colors_convert() {
    let close = |a: u8, b: u8| a.abs_diff(b) <= 1;

    let light = Color::hsl(0.0, 1.0, 0.9).to_rgb();
    assert_eq!(light.r, 255);
    assert!(close(light.g, 204) && close(light.b, 204), "{light:?}");

    assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_rgb(), Rgb::new(255, 0, 0));
    assert_eq!(Color::hex(0x5050db).to_rgb(), Rgb::new(80, 80, 219));
}
