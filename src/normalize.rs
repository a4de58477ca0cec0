/// Collapse insignificant whitespace so structurally identical markup
/// compares equal regardless of indentation.
///
/// Each whitespace run becomes a single space, except runs sitting
/// between two tags (`>` ... `<`) and runs at either end of the input,
/// which are dropped. Spacing inside text content survives, so
/// `milk <b>1 cup</b>` keeps the space between the name and the tag.
///
/// The result is a fixed point: normalizing twice changes nothing.
pub fn normalize_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        while matches!(chars.peek(), Some(next) if next.is_whitespace()) {
            chars.next();
        }
        match (out.as_bytes().last(), chars.peek()) {
            (None, _) | (_, None) => {}
            (Some(&b'>'), Some(&'<')) => {}
            _ => out.push(' '),
        }
    }

    out
}
