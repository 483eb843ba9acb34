use floem_hexpick::{
    hsb_to_rgb, rgb_to_hex, GradientField, Phase, PickerController, Rgb8, SelectionState,
};

fn white() -> SelectionState {
    SelectionState {
        hue: 0.0,
        indicator_visible: false,
        indicator_position: None,
        color: Rgb8::from_rgb(255, 255, 255),
        hex: "#FFFFFF".to_string(),
    }
}

#[test]
fn pick_copy_reset() {
    let mut picker = PickerController::new();
    assert_eq!(picker.initialize(), white());

    picker.change_hue(0.0);
    let picked = picker.drag_to(50.0, 50.0, 100.0, 100.0);
    assert_eq!(picked.color.to_rgb(), (128, 64, 64));
    assert_eq!(picked.hex, "#804040");
    assert_eq!(picker.copy_current_hex(), "#804040");

    assert_eq!(picker.reset(), white());
    assert_eq!(picker.phase(), Phase::Idle);
    assert_eq!(picker.copy_current_hex(), "#FFFFFF");
}

#[test]
fn reset_after_arbitrary_sequence() {
    let mut picker = PickerController::new();
    let moves = [
        (0.1, 12.0, 400.0, 200.0, 150.0),
        (0.95, -30.0, 80.0, 200.0, 150.0),
        (0.5, 199.0, 149.0, 200.0, 150.0),
        (0.5, 10.0, 10.0, 0.0, 0.0),
    ];
    for (hue, x, y, w, h) in moves {
        picker.change_hue(hue);
        picker.drag_to(x, y, w, h);
    }
    assert_eq!(picker.phase(), Phase::Active);
    assert_eq!(picker.reset(), white());
}

#[test]
fn drag_matches_field_sampling() {
    let mut picker = PickerController::new();
    picker.change_hue(0.27);
    let state = picker.drag_to(30.0, 120.0, 150.0, 300.0);

    let field = GradientField::new(0.27);
    assert_eq!(state.color, field.resolve_at(0.2, 0.4));
    assert_eq!(state.color, hsb_to_rgb(0.27, 0.2, 0.6));
    assert_eq!(state.hex, rgb_to_hex(state.color));
}

#[test]
fn degenerate_field_before_any_pick() {
    let mut picker = PickerController::new();
    assert_eq!(picker.drag_to(3.0, 4.0, 0.0, 0.0), white());
    assert_eq!(picker.phase(), Phase::Idle);
}
