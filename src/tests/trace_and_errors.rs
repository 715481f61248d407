use super::*;

#[test]
fn unknown_element_is_reported() -> Result<()> {
    let mut page = Page::new()?;
    let err = page.click("#missing").unwrap_err();
    assert_eq!(err, Error::ElementNotFound("#missing".to_string()));
    Ok(())
}

#[test]
fn non_id_selectors_are_rejected() -> Result<()> {
    let mut page = Page::new()?;
    let err = page.click(".themeBtn").unwrap_err();
    assert_eq!(err, Error::UnsupportedSelector(".themeBtn".to_string()));
    Ok(())
}

#[test]
fn typing_into_a_button_is_a_type_mismatch() -> Result<()> {
    let mut page = Page::new()?;
    let err = page.type_text("#themeBtn", "hello").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "got {err:?}");
    Ok(())
}

#[test]
fn reading_the_value_of_a_paragraph_is_a_type_mismatch() -> Result<()> {
    let page = Page::new()?;
    let err = page.value("#job-title").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "got {err:?}");
    Ok(())
}

#[test]
fn failed_text_assertion_carries_a_dom_snippet() -> Result<()> {
    let page = Page::new()?;
    let err = page.assert_text("#job-title", "Astronaut").unwrap_err();
    match err {
        Error::AssertionFailed {
            selector,
            expected,
            actual,
            dom_snippet,
        } => {
            assert_eq!(selector, "#job-title");
            assert_eq!(expected, "Astronaut");
            assert_eq!(actual, "Web Developer");
            assert!(dom_snippet.contains("job-title"), "snippet {dom_snippet:?}");
        }
        other => panic!("expected AssertionFailed, got {other:?}"),
    }
    Ok(())
}

#[test]
fn trace_records_events_and_dialogs() -> Result<()> {
    let mut page = Page::new()?;
    page.enable_trace(true);
    page.set_trace_stderr(false);

    page.click("#themeBtn")?;
    page.enqueue_prompt_response(Some(""));
    page.click("#editJobBtn")?;

    let logs = page.take_trace_logs();
    assert!(logs.contains(&"event click #themeBtn".to_string()), "{logs:?}");
    assert!(
        logs.contains(&"prompt: Enter a new job title:".to_string()),
        "{logs:?}"
    );
    assert!(
        logs.contains(&"alert: Job title cannot be empty.".to_string()),
        "{logs:?}"
    );

    // Draining leaves the log empty.
    assert!(page.take_trace_logs().is_empty());
    Ok(())
}

#[test]
fn trace_is_silent_unless_enabled() -> Result<()> {
    let mut page = Page::new()?;
    page.click("#themeBtn")?;
    assert!(page.take_trace_logs().is_empty());
    Ok(())
}

#[test]
fn trace_log_limit_is_enforced() -> Result<()> {
    let mut page = Page::new()?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    page.set_trace_log_limit(2)?;

    page.click("#themeBtn")?;
    page.click("#themeBtn")?;
    page.click("#quoteBtn")?;

    let logs = page.take_trace_logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1], "event click #quoteBtn");
    Ok(())
}

#[test]
fn zero_trace_log_limit_is_invalid() -> Result<()> {
    let mut page = Page::new()?;
    let err = page.set_trace_log_limit(0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {err:?}");
    Ok(())
}

#[test]
fn focus_and_blur_update_the_active_element() -> Result<()> {
    let mut page = Page::new()?;
    assert_eq!(page.focused_id(), None);

    page.focus("#user-name")?;
    assert_eq!(page.focused_id().as_deref(), Some("user-name"));

    page.blur("#user-name")?;
    assert_eq!(page.focused_id(), None);

    // Blurring a non-focused element leaves focus alone.
    page.focus("#user-email")?;
    page.blur("#user-name")?;
    assert_eq!(page.focused_id().as_deref(), Some("user-email"));
    Ok(())
}

#[test]
fn dump_dom_serializes_the_subtree() -> Result<()> {
    let page = Page::new()?;
    let dump = page.dump_dom("#job-title")?;
    assert_eq!(dump, r#"<p id="job-title">Web Developer</p>"#);
    Ok(())
}
