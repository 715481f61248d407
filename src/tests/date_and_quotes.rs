use super::*;

use crate::datefmt;

#[test]
fn date_stamp_is_rendered_at_open() -> Result<()> {
    let opened = datefmt::timestamp_ms_from_civil(2025, 1, 1);
    let page = Page::opened_at(opened)?;
    page.assert_text("#dateDisplay", "Wednesday, January 1, 2025")?;
    Ok(())
}

#[test]
fn epoch_open_renders_a_thursday() -> Result<()> {
    let page = Page::new()?;
    page.assert_text("#dateDisplay", "Thursday, January 1, 1970")?;
    Ok(())
}

#[test]
fn mid_day_instants_render_the_same_civil_date() -> Result<()> {
    let opened = datefmt::timestamp_ms_from_civil(2025, 8, 30) + 13 * 3_600_000 + 37;
    let page = Page::opened_at(opened)?;
    page.assert_text("#dateDisplay", "Saturday, August 30, 2025")?;
    Ok(())
}

#[test]
fn german_locale_uses_its_own_tables_and_order() -> Result<()> {
    let opened = datefmt::timestamp_ms_from_civil(2025, 1, 1);
    let page = Page::opened_at_in_locale(opened, "de-DE")?;
    page.assert_text("#dateDisplay", "Mittwoch, 1. Januar 2025")?;
    Ok(())
}

#[test]
fn date_stamp_is_never_recomputed() -> Result<()> {
    let opened = datefmt::timestamp_ms_from_civil(2024, 2, 29);
    let mut page = Page::opened_at(opened)?;
    let initial = page.text("#dateDisplay")?;
    assert_eq!(initial, "Thursday, February 29, 2024");

    page.click("#themeBtn")?;
    page.click("#quoteBtn")?;
    page.type_text("#user-message", "still the same day")?;
    page.assert_text("#dateDisplay", &initial)?;
    Ok(())
}

#[test]
fn civil_conversion_round_trips() {
    for (year, month, day) in [
        (1970, 1, 1),
        (1999, 12, 31),
        (2000, 2, 29),
        (2024, 2, 29),
        (2025, 8, 30),
        (2100, 3, 1),
    ] {
        let days = datefmt::days_from_civil(year, month, day);
        assert_eq!(datefmt::civil_from_days(days), (year, month, day));
    }
}

#[test]
fn quote_display_starts_empty() -> Result<()> {
    let page = Page::new()?;
    page.assert_text("#quoteDisplay", "")?;
    Ok(())
}

#[test]
fn every_displayed_quote_is_a_member_of_the_list() -> Result<()> {
    let mut page = Page::new()?;
    for _ in 0..50 {
        page.click("#quoteBtn")?;
        let shown = page.text("#quoteDisplay")?;
        assert!(QUOTES.contains(&shown.as_str()), "unexpected quote {shown:?}");
    }
    Ok(())
}

#[test]
fn seeded_draws_are_deterministic() -> Result<()> {
    let mut first = Page::new()?;
    let mut second = Page::new()?;
    first.set_random_seed(12_345);
    second.set_random_seed(12_345);

    for _ in 0..10 {
        first.click("#quoteBtn")?;
        second.click("#quoteBtn")?;
        assert_eq!(first.text("#quoteDisplay")?, second.text("#quoteDisplay")?);
    }
    Ok(())
}

#[test]
fn every_quote_eventually_appears() -> Result<()> {
    let mut page = Page::new()?;
    page.set_random_seed(7);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        page.click("#quoteBtn")?;
        seen.insert(page.text("#quoteDisplay")?);
    }
    assert_eq!(seen.len(), QUOTES.len());
    Ok(())
}

#[test]
fn a_new_draw_replaces_the_previous_quote() -> Result<()> {
    let mut page = Page::new()?;
    page.set_random_seed(2);
    page.click("#quoteBtn")?;
    let first = page.text("#quoteDisplay")?;
    assert!(!first.is_empty());

    // Draw until the display changes; repeats are allowed, so several
    // clicks may show the same quote.
    for _ in 0..100 {
        page.click("#quoteBtn")?;
        if page.text("#quoteDisplay")? != first {
            return Ok(());
        }
    }
    panic!("quote display never changed across 100 draws");
}
