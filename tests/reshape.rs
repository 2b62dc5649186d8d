use myanmar_reshaper::{reshape, reshape_with_policy, tables::pua, MarkerPolicy};

fn text(cs: &[char]) -> String {
    cs.iter().collect()
}

#[test]
fn markup_passes_through() {
    let html = r#"<p class="x">Hello, <b>world</b> &amp; friends</p>"#;
    assert_eq!(reshape(html), html);
}

#[test]
fn boundary_lengths() {
    assert_eq!(reshape(""), "");
    assert_eq!(reshape("\u{1000}"), "\u{1000}");
    assert_eq!(reshape("\u{1031}"), "\u{1031}");
    assert_eq!(reshape("\u{103C}"), "\u{103C}");
    assert_eq!(reshape("\u{1000}\u{1031}"), "\u{1000}\u{1031}");
}

#[test]
fn sign_e_precedes_medial() {
    let input = text(&['\u{1000}', '\u{103B}', '\u{1031}']);
    let expected = text(&['\u{1000}', '\u{1031}', '\u{103B}']);
    assert_eq!(reshape(&input), expected);
}

#[test]
fn na_shortens_before_sign_u() {
    let input = text(&['\u{1014}', '\u{102F}']);
    let expected = text(&[pua::NA_SHORT, '\u{102F}']);
    assert_eq!(reshape(&input), expected);
}

#[test]
fn medial_ra_widens_before_wide_base() {
    let input = text(&['\u{103C}', '\u{1000}']);
    let expected = text(&[pua::MEDIAL_RA_WIDE, '\u{1000}']);
    assert_eq!(reshape(&input), expected);
}

#[test]
fn non_trigger_consonants_unchanged() {
    let input = text(&['\u{1015}', '\u{1019}']);
    assert_eq!(reshape(&input), input);
}

#[test]
fn reorder_feeds_contextual_substitution() {
    // The Sign U looks back at the Medial Ya only after the Sign E has
    // been walked in front of it.
    let input = text(&['\u{1000}', '\u{103B}', '\u{1031}', '\u{102F}']);
    let expected = text(&['\u{1000}', '\u{1031}', '\u{103B}', pua::SIGN_U_LOW]);
    assert_eq!(reshape(&input), expected);
}

#[test]
fn no_wraparound_at_buffer_start() {
    // A below-vowel with its would-be context at the end of the buffer
    // must not match across the start.
    let input = text(&['\u{102F}', '\u{103B}']);
    assert_eq!(reshape(&input), input);

    // Likewise a Medial Ra whose Sign E has no base slot before it.
    let input = text(&['\u{1031}', '\u{103C}']);
    assert_eq!(reshape(&input), input);
}

#[test]
fn word_kywei() {
    // ကြွေး: base, Medial Ra, Medial Wa, Sign E, Visarga.
    let input = "\u{1000}\u{103C}\u{103D}\u{1031}\u{1038}";
    let expected = "\u{001D}\u{1031}\u{E1B2}\u{1000}\u{103D}\u{1038}";
    assert_eq!(reshape(input), expected);
    assert_eq!(reshape_with_policy(input, MarkerPolicy::Shifted), expected);
}

#[test]
fn word_pyu() {
    // ပြု: narrow base keeps the plain Medial Ra, the Sign U drops low.
    let input = "\u{1015}\u{103C}\u{102F}";
    let expected = "\u{103C}\u{1015}\u{E2F1}";
    assert_eq!(reshape(input), expected);
}

#[test]
fn word_mya_unchanged() {
    // များ holds no trigger in any context.
    let input = "\u{1019}\u{103B}\u{102C}\u{1038}";
    assert_eq!(reshape(input), input);
}

#[test]
fn na_detaches_sign_e() {
    let input = "\u{1014}\u{1031}\u{102F}";
    let expected = "\u{001D}\u{1031}\u{E107}\u{102F}";
    assert_eq!(reshape(input), expected);
    assert_eq!(reshape_with_policy(input, MarkerPolicy::Shifted), expected);
}

#[test]
fn marker_policies_diverge_on_detached_cluster_lookback() {
    // After the Medial Ra rewrite the Dot Below sits three slots from the
    // Ra under Legacy (the marker pair shares one slot) but four under
    // Shifted, so only Legacy takes the shifted Dot Below form. This pins
    // the historical position arithmetic; consumers needing it must use
    // Legacy.
    let input = "\u{101B}\u{1037}\u{1031}\u{103C}";
    assert_eq!(
        reshape_with_policy(input, MarkerPolicy::Legacy),
        "\u{101B}\u{001D}\u{1031}\u{103C}\u{E137}"
    );
    assert_eq!(
        reshape_with_policy(input, MarkerPolicy::Shifted),
        "\u{101B}\u{001D}\u{1031}\u{103C}\u{1037}"
    );
}

#[test]
fn myanmar_inside_attribute_values() {
    // The transform works on the raw character stream, so text inside
    // attributes is reshaped the same as element text.
    let input = "<span title=\"\u{1014}\u{102F}\">\u{1014}\u{102F}</span>";
    let expected = format!(
        "<span title=\"{form}\u{102F}\">{form}\u{102F}</span>",
        form = pua::NA_SHORT
    );
    assert_eq!(reshape(input), expected);
}

#[test]
fn header_footer_and_bodies_reshape_independently() {
    // The rendering pipeline calls reshape once per header, footer, and
    // body string; each call allocates its own buffer.
    let header = "<h1>\u{1000}\u{103C}\u{102F}</h1>";
    let bodies = ["<p>\u{1014}\u{102F}</p>", "<p>plain</p>"];
    let reshaped_header = reshape(header);
    let reshaped_bodies: Vec<_> = bodies.iter().map(|b| reshape(b)).collect();
    assert_eq!(
        reshaped_header,
        format!("<h1>{}\u{1000}\u{E2F1}</h1>", pua::MEDIAL_RA_WIDE)
    );
    assert_eq!(
        reshaped_bodies[0],
        format!("<p>{}\u{102F}</p>", pua::NA_SHORT)
    );
    assert_eq!(reshaped_bodies[1], bodies[1]);
}
