#![allow(clippy::float_cmp)]

use super::*;
use crate::carousel::Direction;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- slides_per_view ---

#[test]
fn narrow_viewports_show_one_card() {
    assert_eq!(slides_per_view(320.0), 1);
    assert_eq!(slides_per_view(768.0), 1);
}

#[test]
fn medium_viewports_show_two_cards() {
    assert_eq!(slides_per_view(768.5), 2);
    assert_eq!(slides_per_view(1024.0), 2);
    assert_eq!(slides_per_view(1200.0), 2);
}

#[test]
fn wide_viewports_show_three_cards() {
    assert_eq!(slides_per_view(1201.0), 3);
    assert_eq!(slides_per_view(2560.0), 3);
}

// --- item_width ---

#[test]
fn single_card_fills_container() {
    assert!(approx_eq(item_width(600.0, 1), 600.0));
}

#[test]
fn two_cards_share_one_gap() {
    assert!(approx_eq(item_width(1000.0, 2), (1000.0 - 40.0) / 2.0));
}

#[test]
fn three_cards_share_two_gaps() {
    assert!(approx_eq(item_width(1300.0, 3), (1300.0 - 80.0) / 3.0));
}

#[test]
fn item_width_never_negative() {
    assert_eq!(item_width(10.0, 3), 0.0);
}

// --- track_offset ---

#[test]
fn offset_is_zero_on_first_slide() {
    let model = CarouselModel::new(7, 3);
    assert_eq!(track_offset(&model, 1300.0), 0.0);
}

#[test]
fn offset_moves_one_card_plus_gap_per_step() {
    let mut model = CarouselModel::new(7, 3);
    model.step(Direction::Next);
    model.step(Direction::Next);
    let card = (1300.0 - 80.0) / 3.0;
    assert!(approx_eq(track_offset(&model, 1300.0), -2.0 * (card + 40.0)));
}

#[test]
fn single_card_offset_still_counts_gap() {
    let mut model = CarouselModel::new(4, 1);
    model.step(Direction::Next);
    assert!(approx_eq(track_offset(&model, 500.0), -540.0));
}

#[test]
fn transform_formats_pixels() {
    let mut model = CarouselModel::new(4, 1);
    assert_eq!(track_transform(&model, 500.0), "translateX(0px)");
    model.step(Direction::Next);
    assert_eq!(track_transform(&model, 500.0), "translateX(-540px)");
}

// --- dot_count ---

#[test]
fn dots_cover_a_partial_last_page() {
    assert_eq!(dot_count(7, 3), 3);
    assert_eq!(dot_count(6, 3), 2);
}

#[test]
fn no_cards_means_no_dots() {
    assert_eq!(dot_count(0, 2), 0);
}

#[test]
fn zero_page_size_counts_as_one() {
    assert_eq!(dot_count(4, 0), 4);
}
