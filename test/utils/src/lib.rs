/// A document in the canonical markup emission: color and bold wrap the
/// whole body, reserved characters escaped. Parsing and re-rendering it
/// must reproduce it byte for byte.
pub fn formatted_fixture() -> &'static str {
    return r#"<span style="color:#98c379"><b>Grocery list
- eggs &amp; flour
- 2 &lt; 3 apples</b></span>"#;
}

/// The same document as the editing surface holds it.
pub fn fixture_lines() -> Vec<String> {
    return vec![
        "Grocery list".to_string(),
        "- eggs & flour".to_string(),
        "- 2 < 3 apples".to_string(),
    ];
}
