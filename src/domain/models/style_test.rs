use super::EmphasisChoice;
use super::Rgb;
use super::TextStyle;

#[test]
fn it_round_trips_hex_colors() {
    let color = Rgb {
        r: 0x61,
        g: 0xaf,
        b: 0xef,
    };

    assert_eq!(color.to_hex(), "#61afef");
    assert_eq!(Rgb::parse_hex(&color.to_hex()).unwrap(), color);
}

#[test]
fn it_rejects_malformed_hex_colors() {
    assert!(Rgb::parse_hex("61afef").is_none());
    assert!(Rgb::parse_hex("#61af").is_none());
    assert!(Rgb::parse_hex("#61afzz").is_none());
    assert!(Rgb::parse_hex("").is_none());
}

#[test]
fn it_toggles_emphasis() {
    let mut style = TextStyle::default();
    assert!(style.is_plain());

    style.apply(EmphasisChoice::Bold);
    style.apply(EmphasisChoice::Underline);
    assert!(style.bold);
    assert!(style.underline);
    assert!(!style.italic);

    style.apply(EmphasisChoice::Bold);
    assert!(!style.bold);
    assert!(style.underline);
}

#[test]
fn it_clears_emphasis_but_keeps_color() {
    let mut style = TextStyle {
        color: Some(Rgb { r: 1, g: 2, b: 3 }),
        bold: true,
        italic: true,
        underline: false,
    };

    style.apply(EmphasisChoice::Regular);

    assert!(!style.bold);
    assert!(!style.italic);
    assert_eq!(style.color, Some(Rgb { r: 1, g: 2, b: 3 }));
    assert!(!style.is_plain());
}
