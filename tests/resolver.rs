use tocolor::color::Color;
use tocolor::resolver::{FUNCTION_NAME, NoConvertibleColor, resolve, resolve_call};
use tocolor::value::Value;

#[test]
fn three_element_arrays_resolve_opaque() {
    for (r, g, b) in [(0u8, 0u8, 0u8), (10, 20, 30), (255, 255, 255)] {
        let candidate = Value::from(vec![r as f64, g as f64, b as f64]);
        assert_eq!(resolve(&[candidate]), Ok(Color::rgb(r, g, b)));
    }
}

#[test]
fn four_element_array_rounds_fractional_alpha() {
    assert_eq!(
        resolve(&[vec![10.0, 20.0, 30.0, 0.5].into()]),
        Ok(Color::rgba(10, 20, 30, 128))
    );
    assert_eq!(resolve(&[vec![0.0, 0.0, 0.0, 1.0].into()]), Ok(Color::rgba(0, 0, 0, 255)));
    assert_eq!(resolve(&[vec![0.0, 0.0, 0.0, 0.0].into()]), Ok(Color::rgba(0, 0, 0, 0)));
}

#[test]
fn out_of_range_channel_skips_to_later_candidates() {
    // The bad array alone exhausts the sequence...
    assert_eq!(resolve(&[vec![300.0, 0.0, 0.0].into()]), Err(NoConvertibleColor));
    // ...but with a later valid candidate it is simply skipped.
    assert_eq!(
        resolve(&[vec![300.0, 0.0, 0.0].into(), vec![1.0, 2.0, 3.0].into()]),
        Ok(Color::rgb(1, 2, 3))
    );
}

#[test]
fn hex_and_shorthand_decode_to_the_same_color() {
    assert_eq!(resolve(&["#3366CC".into()]), Ok(Color::rgb(51, 102, 204)));
    assert_eq!(resolve(&["#36C".into()]), Ok(Color::rgb(51, 102, 204)));
}

#[test]
fn hex_with_interior_sign_is_skipped_not_resolved() {
    // "+3" must not pass as the green pair, alone or ahead of a valid
    // candidate.
    assert_eq!(resolve(&["#12+345".into()]), Err(NoConvertibleColor));
    assert_eq!(
        resolve(&["#12+345".into(), "#3366CC".into()]),
        Ok(Color::rgb(51, 102, 204))
    );
}

#[test]
fn functional_notation_resolves() {
    assert_eq!(resolve(&["rgb(10,20,30)".into()]), Ok(Color::rgb(10, 20, 30)));
    assert_eq!(
        resolve(&["rgba(10,20,30,0.5)".into()]),
        Ok(Color::rgba(10, 20, 30, 128))
    );
}

#[test]
fn functional_close_paren_asymmetry() {
    // rgb( is accepted without a closing parenthesis; rgba( is not.
    assert_eq!(resolve(&["rgb(1,2,3".into()]), Ok(Color::rgb(1, 2, 3)));
    assert_eq!(resolve(&["rgba(1,2,3,0.5".into()]), Err(NoConvertibleColor));
}

#[test]
fn first_match_wins_over_later_candidates() {
    let candidates = [
        Value::from("garbage"),
        Value::from("rgb(1,2,3)"),
        Value::from("rgb(9,9,9)"),
    ];
    assert_eq!(resolve(&candidates), Ok(Color::rgb(1, 2, 3)));
}

#[test]
fn exhausted_sequence_is_the_only_error() {
    assert_eq!(resolve(&[]), Err(NoConvertibleColor));
    assert_eq!(
        resolve(&["not a color".into(), vec![999.0, 0.0, 0.0].into()]),
        Err(NoConvertibleColor)
    );
}

#[test]
fn already_color_candidate_passes_through() {
    let color = Color::rgba(1, 2, 3, 4);
    assert_eq!(resolve(&[color.into()]), Ok(color));
}

#[test]
fn other_candidates_never_convert() {
    assert_eq!(resolve(&[Value::Other]), Err(NoConvertibleColor));
    assert_eq!(resolve(&[Value::Other, "#36C".into()]), Ok(Color::rgb(51, 102, 204)));
}

#[test]
fn call_reserves_the_name_slot() {
    let args = [Value::from(FUNCTION_NAME), Value::from("#36C")];
    assert_eq!(resolve_call(&args), Ok(Color::rgb(51, 102, 204)));

    // Slot 0 itself is never evaluated, whatever it holds.
    assert_eq!(resolve_call(&["#36C".into()]), Err(NoConvertibleColor));
    assert_eq!(resolve_call(&[]), Err(NoConvertibleColor));
}

#[test]
fn error_names_the_function() {
    let message = NoConvertibleColor.to_string();
    assert!(message.contains(FUNCTION_NAME), "unexpected message: {message}");
}
