//! Input sanitization for free-text user fields

use super::entity::UserDraft;

// Entities emitted by escape_markup; an ampersand already starting one of
// these is left alone so that sanitizing twice is a no-op.
const EMITTED_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&#34;", "&#39;"];

/// Trim and markup-escape the free-text fields of a draft and clear any
/// client-supplied id
///
/// Idempotent: applying it to an already-sanitized draft yields the same
/// draft. The password is left untouched; it is hashed, not rendered.
pub fn sanitize_draft(draft: &mut UserDraft) {
    draft.id = 0;
    draft.name = escape_markup(draft.name.trim());
    draft.email = escape_markup(draft.email.trim());
    draft.phone_number = escape_markup(draft.phone_number.trim());
}

/// Escape the markup-significant characters `& < > " '`
pub fn escape_markup(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        match c {
            '&' => {
                if let Some(entity) = EMITTED_ENTITIES.iter().find(|e| rest.starts_with(**e)) {
                    escaped.push_str(entity);
                    rest = &rest[entity.len()..];
                    continue;
                }
                escaped.push_str("&amp;");
            }
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    escaped
}
