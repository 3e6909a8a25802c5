//! Integration tests for render selection and drawing

mod common;
use common::*;

use tilt_indicator::render::{self, IDLE_TEXT, raw_lines};
use tilt_indicator::{
    AccelSample, Anchor, Axis, DisplayMode, Indicator, IndicatorSize, Orientation, RenderPlan,
};

fn plan_for(mode: DisplayMode, sample: AccelSample) -> RenderPlan {
    render::select(mode, Orientation::from_sample(sample), sample)
}

#[test]
fn flat_sample_selects_small_negative_indicators() {
    let sample = AccelSample::new(0.0, 0.0, 1.0);
    let orientation = Orientation::from_sample(sample);
    assert_eq!(orientation.angle_x, 0.0);
    assert_eq!(orientation.angle_y, 0.0);

    match plan_for(DisplayMode::TwoAxis, sample) {
        RenderPlan::Indicators(shown) => {
            assert_eq!(shown.len(), 2);
            for indicator in &shown {
                assert_eq!(indicator.size, IndicatorSize::Small);
                assert_eq!(indicator.anchor, Anchor::Negative);
            }
            assert_eq!(shown[0].axis, Axis::X);
            assert_eq!(shown[1].axis, Axis::Y);
        }
        other => panic!("expected indicators, got {:?}", other),
    }
}

#[test]
fn size_switches_just_above_half_a_degree() {
    assert_eq!(Indicator::for_angle(Axis::X, 0.5).size, IndicatorSize::Small);
    assert_eq!(Indicator::for_angle(Axis::X, -0.5).size, IndicatorSize::Small);
    assert_eq!(Indicator::for_angle(Axis::X, 0.51).size, IndicatorSize::Large);
    assert_eq!(Indicator::for_angle(Axis::X, -0.51).size, IndicatorSize::Large);
}

#[test]
fn anchor_follows_sign() {
    assert_eq!(Indicator::for_angle(Axis::Y, 0.01).anchor, Anchor::Positive);
    assert_eq!(Indicator::for_angle(Axis::Y, 0.0).anchor, Anchor::Negative);
    assert_eq!(Indicator::for_angle(Axis::Y, -30.0).anchor, Anchor::Negative);
}

#[test]
fn single_axis_modes_show_one_indicator() {
    let sample = AccelSample::new(0.3, -0.3, 0.9);

    match plan_for(DisplayMode::XOnly, sample) {
        RenderPlan::Indicators(shown) => {
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].axis, Axis::X);
            assert_eq!(shown[0].anchor, Anchor::Positive);
        }
        other => panic!("expected indicators, got {:?}", other),
    }

    match plan_for(DisplayMode::YOnly, sample) {
        RenderPlan::Indicators(shown) => {
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].axis, Axis::Y);
            assert_eq!(shown[0].anchor, Anchor::Negative);
        }
        other => panic!("expected indicators, got {:?}", other),
    }
}

#[test]
fn large_glyph_has_sixteen_pixels_small_has_four() {
    let large = Indicator::for_angle(Axis::X, 20.0);
    let small = Indicator::for_angle(Axis::X, 0.1);
    assert_eq!(large.pixels().count(), 16);
    assert_eq!(small.pixels().count(), 4);
}

#[test]
fn glyphs_sit_on_their_edges_and_stay_on_panel() {
    let cases = [
        (Axis::X, 10.0, (0, 23)),
        (Axis::X, -10.0, (63, 23)),
        (Axis::Y, 10.0, (31, 0)),
        (Axis::Y, -10.0, (31, 47)),
    ];

    for (axis, angle, apex) in cases {
        let indicator = Indicator::for_angle(axis, angle);
        let pixels: Vec<(i32, i32)> = indicator.pixels().collect();
        assert_eq!(pixels[0], apex, "{:?} at {}", axis, angle);
        for (x, y) in pixels {
            assert!((0..64).contains(&x) && (0..48).contains(&y));
        }
    }
}

#[test]
fn raw_data_formats_two_decimals_at_fixed_lines() {
    let sample = AccelSample::new(1.234, -0.056, 9.81);

    let mut display = RecordingDisplay::new();
    render::render(&plan_for(DisplayMode::RawData, sample), &mut display);

    assert_eq!(
        display.texts(),
        vec![
            (0, 0, "ax: 1.23".to_string()),
            (0, 10, "ay: -0.06".to_string()),
            (0, 20, "az: 9.81".to_string()),
        ]
    );
    assert!(display.pixels().is_empty());
}

#[test]
fn raw_lines_match_rendered_text() {
    let lines = raw_lines(AccelSample::new(-1.0, 0.0, 0.004));
    assert_eq!(lines[0].text.as_str(), "ax: -1.00");
    assert_eq!(lines[1].text.as_str(), "ay: 0.00");
    assert_eq!(lines[2].text.as_str(), "az: 0.00");
}

#[test]
fn extreme_readings_are_shown_in_full() {
    let lines = raw_lines(AccelSample::new(f32::MIN, -123456.78, 1e9));
    assert_eq!(lines[0].text.as_str(), format!("ax: {:.2}", f32::MIN));
    assert_eq!(lines[1].text.as_str(), "ay: -123456.78");
    assert_eq!(lines[2].text.as_str(), "az: 1000000000.00");
}

#[test]
fn off_draws_only_the_idle_glyph() {
    let sample = AccelSample::new(5.0, 5.0, 1.0);
    let plan = plan_for(DisplayMode::Off, sample);
    assert_eq!(plan, RenderPlan::Idle);

    let mut display = RecordingDisplay::new();
    render::render(&plan, &mut display);
    assert_eq!(display.calls(), &[DisplayCall::Text(5, 5, IDLE_TEXT.to_string())]);
}

#[test]
fn render_leaves_clear_and_present_to_caller() {
    let mut display = RecordingDisplay::new();
    render::render(
        &plan_for(DisplayMode::TwoAxis, AccelSample::new(0.5, 0.5, 0.5)),
        &mut display,
    );

    assert_eq!(display.count(&DisplayCall::Clear), 0);
    assert_eq!(display.count(&DisplayCall::Present), 0);
    assert_eq!(display.pixels().len(), 32);
}
