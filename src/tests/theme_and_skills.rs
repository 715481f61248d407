use super::*;

#[test]
fn theme_toggle_flips_marker_and_label() -> Result<()> {
    let mut page = Page::new()?;
    assert!(!page.body_has_dark_mode());
    page.assert_text("#themeBtn", "Toggle Dark Mode")?;

    page.click("#themeBtn")?;
    assert!(page.body_has_dark_mode());
    page.assert_text("#themeBtn", "Switch to Light Mode")?;
    Ok(())
}

#[test]
fn theme_toggle_twice_restores_initial_state() -> Result<()> {
    let mut page = Page::new()?;
    page.click("#themeBtn")?;
    page.click("#themeBtn")?;
    assert!(!page.body_has_dark_mode());
    page.assert_text("#themeBtn", "Toggle Dark Mode")?;
    Ok(())
}

#[test]
fn skills_toggle_hides_section_and_updates_label() -> Result<()> {
    let mut page = Page::new()?;
    assert!(!page.has_class("#skillsSection", "hidden")?);
    page.assert_text("#toggleSkillsBtn", "Hide Skills")?;

    page.click("#toggleSkillsBtn")?;
    assert!(page.has_class("#skillsSection", "hidden")?);
    page.assert_text("#toggleSkillsBtn", "Show Skills")?;
    Ok(())
}

#[test]
fn skills_toggle_is_involution() -> Result<()> {
    let mut page = Page::new()?;
    page.click("#toggleSkillsBtn")?;
    page.click("#toggleSkillsBtn")?;
    assert!(!page.has_class("#skillsSection", "hidden")?);
    page.assert_text("#toggleSkillsBtn", "Hide Skills")?;
    Ok(())
}

#[test]
fn toggles_are_independent_of_each_other() -> Result<()> {
    let mut page = Page::new()?;
    page.click("#themeBtn")?;
    page.click("#toggleSkillsBtn")?;

    assert!(page.body_has_dark_mode());
    assert!(page.has_class("#skillsSection", "hidden")?);
    page.assert_text("#themeBtn", "Switch to Light Mode")?;
    page.assert_text("#toggleSkillsBtn", "Show Skills")?;

    page.click("#themeBtn")?;
    assert!(!page.body_has_dark_mode());
    assert!(page.has_class("#skillsSection", "hidden")?);
    Ok(())
}

impl Page {
    fn body_has_dark_mode(&self) -> bool {
        self.dom.has_class(self.elements.body, "dark-mode")
    }
}
