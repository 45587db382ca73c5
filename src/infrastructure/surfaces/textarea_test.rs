use test_utils::fixture_lines;
use test_utils::formatted_fixture;
use tui_textarea::CursorMove;

use super::TextAreaSurface;
use crate::domain::models::EditingSurface;
use crate::domain::models::EmphasisChoice;
use crate::domain::models::Rgb;

fn surface_with(text: &str) -> TextAreaSurface {
    let mut surface = TextAreaSurface::new();
    surface.insert_text(text);
    return surface;
}

fn select(surface: &mut TextAreaSurface, from: (u16, u16), to: (u16, u16)) {
    surface.textarea.move_cursor(CursorMove::Jump(from.0, from.1));
    surface.textarea.start_selection();
    surface.textarea.move_cursor(CursorMove::Jump(to.0, to.1));
}

#[test]
fn it_exports_markup_with_the_document_style() {
    let mut surface = surface_with("a & b");
    surface.set_color(Rgb {
        r: 0x61,
        g: 0xaf,
        b: 0xef,
    });
    surface.set_emphasis(EmphasisChoice::Bold);

    insta::assert_snapshot!(surface.export_markup(), @r###"<span style="color:#61afef"><b>a &amp; b</b></span>"###);
}

#[test]
fn it_round_trips_markup() {
    let mut surface = TextAreaSurface::new();

    surface.load_markup(formatted_fixture());

    assert_eq!(surface.textarea.lines(), fixture_lines());
    assert_eq!(surface.export_markup(), formatted_fixture());
}

#[test]
fn it_extracts_a_single_line_selection() {
    let mut surface = surface_with("hello world");
    select(&mut surface, (0, 0), (0, 5));

    assert_eq!(surface.selection_markup().unwrap(), "hello");
}

#[test]
fn it_extracts_a_multi_line_selection() {
    let mut surface = surface_with("one\ntwo\nthree");
    select(&mut surface, (0, 2), (2, 3));

    assert_eq!(surface.selection_markup().unwrap(), "e\ntwo\nthr");
}

#[test]
fn it_wraps_the_selection_in_the_document_style() {
    let mut surface = surface_with("hello world");
    surface.set_emphasis(EmphasisChoice::Italic);
    select(&mut surface, (0, 6), (0, 11));

    assert_eq!(surface.selection_markup().unwrap(), "<i>world</i>");
}

#[test]
fn it_reports_no_selection_markup_without_a_selection() {
    let surface = surface_with("hello world");
    assert!(surface.selection_markup().is_none());
}

#[test]
fn it_removes_the_selection() {
    let mut surface = surface_with("hello world");
    select(&mut surface, (0, 5), (0, 11));

    assert!(surface.remove_selection());
    assert_eq!(surface.textarea.lines(), ["hello"]);
}

#[test]
fn it_inserts_the_text_of_formatted_markup() {
    let mut surface = surface_with("start: ");

    surface.insert_markup("<b>bold</b><br>next");

    assert_eq!(surface.textarea.lines(), ["start: bold", "next"]);
}

#[test]
fn it_clears_content_and_style() {
    let mut surface = surface_with("text");
    surface.set_emphasis(EmphasisChoice::Bold);

    surface.clear();

    assert_eq!(surface.textarea.lines(), [""]);
    assert!(surface.style().is_plain());
    assert_eq!(surface.export_markup(), "");
}
