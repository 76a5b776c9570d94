//! Tests for attributed text editing.

use attributed::{Attributes, Color, Font, FontVariant, StyledText, TextRangeError, derive_variant};

fn bold() -> Attributes {
    Attributes::font(derive_variant(&Font::default(), FontVariant::Bold))
}

fn dump(text: &StyledText) -> String {
    text.runs()
        .map(|(slice, attributes)| match &attributes.font {
            Some(font) => format!("{slice:?} {font}"),
            None => format!("{slice:?}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn stripping_markers_keeps_styling_anchored() {
    let mut text = StyledText::plain("a **b** c");
    text.add_attributes(0..9, Attributes::font(Font::default()))
        .unwrap();
    text.add_attributes(2..7, bold()).unwrap();

    // Trailing marker first, then leading.
    text.delete_range(5..7).unwrap();
    text.delete_range(2..4).unwrap();

    assert_eq!(text.text(), "a b c");
    insta::assert_snapshot!(dump(&text), @r#"
    "a " system 12
    "b" system 12 bold
    " c" system 12
    "#);
}

#[test]
fn growing_replacement_shifts_later_spans() {
    let mut text = StyledText::plain("- x\n- y");
    text.add_attributes(6..7, Attributes::new().with_color(Color::RED))
        .unwrap();
    text.replace_range(0..1, "•").unwrap();

    assert_eq!(text.text(), "• x\n- y");
    assert_eq!(text.slice(text.spans()[0].range()), Some("y"));
}

#[test]
fn multibyte_text_edits() {
    let mut text = StyledText::plain("*héllo*");
    text.add_attributes(0..8, bold()).unwrap();
    text.delete_range(7..8).unwrap();
    text.delete_range(0..1).unwrap();

    assert_eq!(text.text(), "héllo");
    assert_eq!(text.spans()[0].range(), 0..6);
}

#[test]
fn edit_errors_leave_text_unchanged() {
    let mut text = StyledText::plain("héllo");
    assert_eq!(
        text.replace_range(1..2, "e"),
        Err(TextRangeError::NotCharBoundary(2))
    );
    assert_eq!(
        text.delete_range(4..9),
        Err(TextRangeError::OutOfBounds {
            start: 4,
            end: 9,
            len: 6
        })
    );
    assert_eq!(text.text(), "héllo");
}

#[test]
fn insertion_at_span_end_is_not_styled() {
    let mut text = StyledText::plain("ab");
    text.add_attributes(0..1, Attributes::new().with_color(Color::RED))
        .unwrap();
    text.replace_range(1..1, "X").unwrap();

    assert_eq!(text.text(), "aXb");
    assert_eq!(text.attributes_at(1).color, None);
}

// ============================================================================
// Layering
// ============================================================================

#[test]
fn later_spans_override_set_fields_only() {
    let mut text = StyledText::plain("link");
    text.add_attributes(
        0..4,
        Attributes::font(Font::default()).with_color(Color::BLACK),
    )
    .unwrap();
    text.add_attributes(0..4, Attributes::new().with_color(Color::BLUE).with_link("http://x"))
        .unwrap();

    let attributes = text.attributes_at(2);
    assert_eq!(attributes.font, Some(Font::default()));
    assert_eq!(attributes.color, Some(Color::BLUE));
    assert_eq!(attributes.link.as_deref(), Some("http://x"));
}

#[test]
fn runs_cover_whole_text() {
    let mut text = StyledText::plain("one two three");
    text.add_attributes(4..7, bold()).unwrap();
    text.add_attributes(6..13, Attributes::new().with_indent(1))
        .unwrap();

    let runs: Vec<_> = text.runs().map(|(slice, _)| slice).collect();
    assert_eq!(runs, vec!["one ", "tw", "o", " three"]);
    assert_eq!(runs.concat(), text.text());
}
