/// Element id an in-page link scrolls to.
///
/// Returns `None` for a bare `#` and for anything that is not a same-page
/// anchor; those clicks keep the browser's default behaviour.
pub fn scroll_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
