use test_utils::fixture_lines;
use test_utils::formatted_fixture;

use super::Markup;
use crate::domain::models::Rgb;
use crate::domain::models::TextStyle;

fn lines(items: &[&str]) -> Vec<String> {
    return items
        .iter()
        .map(|item| return item.to_string())
        .collect::<Vec<String>>();
}

#[test]
fn it_escapes_reserved_characters() {
    let res = Markup::render(&lines(&["<tag> & \"quote\""]), &TextStyle::default());
    insta::assert_snapshot!(res, @"&lt;tag&gt; &amp; &quot;quote&quot;");
}

#[test]
fn it_renders_plain_text_untouched() {
    let res = Markup::render(&lines(&["one", "two", ""]), &TextStyle::default());
    assert_eq!(res, "one\ntwo\n");
}

#[test]
fn it_renders_canonical_nesting() {
    let style = TextStyle {
        color: Some(Rgb {
            r: 0x61,
            g: 0xaf,
            b: 0xef,
        }),
        bold: true,
        italic: true,
        underline: true,
    };

    let res = Markup::render(&lines(&["a & b"]), &style);
    insta::assert_snapshot!(res, @r###"<span style="color:#61afef"><b><i><u>a &amp; b</u></i></b></span>"###);
}

#[test]
fn it_parses_its_own_output() {
    let style = TextStyle {
        color: Some(Rgb { r: 255, g: 0, b: 0 }),
        bold: false,
        italic: true,
        underline: false,
    };
    let source = lines(&["first & last", "", "2 < 3"]);

    let parsed = Markup::parse(&Markup::render(&source, &style));

    assert_eq!(parsed.lines, source);
    assert_eq!(parsed.style, style);
}

#[test]
fn it_round_trips_the_fixture() {
    let parsed = Markup::parse(formatted_fixture());

    assert_eq!(parsed.lines, fixture_lines());
    assert_eq!(
        Markup::render(&parsed.lines, &parsed.style),
        formatted_fixture()
    );
}

#[test]
fn it_parses_loose_markup() {
    let parsed = Markup::parse("Hello <EM>there</EM><BR>again");

    assert_eq!(parsed.lines, lines(&["Hello there", "again"]));
    assert_eq!(parsed.style, TextStyle::default());
}

#[test]
fn it_breaks_lines_on_paragraphs() {
    let parsed = Markup::parse("<p>one</p><p>two</p>");
    assert_eq!(parsed.lines, lines(&["one", "two", ""]));
}

#[test]
fn it_decodes_entities() {
    let parsed = Markup::parse("&amp;&lt;&gt;&quot;&#39;&nbsp;&bogus;");
    assert_eq!(parsed.lines, lines(&["&<>\"' &bogus;"]));
}

#[test]
fn it_ignores_unknown_tags_but_keeps_text() {
    let parsed = Markup::parse("<script>alert</script> <blink>hi</blink>");
    assert_eq!(parsed.lines, lines(&["alert hi"]));
}

#[test]
fn it_reads_font_tag_colors() {
    let parsed = Markup::parse("<font color=\"#ff8800\">warm</font>");

    assert_eq!(parsed.lines, lines(&["warm"]));
    assert_eq!(
        parsed.style.color,
        Some(Rgb {
            r: 0xff,
            g: 0x88,
            b: 0x00
        })
    );
}

#[test]
fn it_keeps_style_for_empty_documents() {
    let style = TextStyle {
        color: None,
        bold: true,
        italic: false,
        underline: false,
    };

    let rendered = Markup::render(&lines(&[""]), &style);
    assert_eq!(rendered, "<b></b>");

    let parsed = Markup::parse(&rendered);
    assert_eq!(parsed.lines, lines(&[""]));
    assert_eq!(parsed.style, style);
}

#[test]
fn it_strips_markup_to_plain_text() {
    let res = Markup::plain_text("<b>bold</b> and <i>slanted</i><br>next &amp; done");
    assert_eq!(res, "bold and slanted\nnext & done");
}
