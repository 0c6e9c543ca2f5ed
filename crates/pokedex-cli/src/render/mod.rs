//! Terminal rendering for `inspect`

pub mod blocks;
pub mod card;

/// Remove SGR escape sequences (`ESC [ ... m`) from `text`
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in 0x40..=0x7E
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
            continue;
        }
        plain.push(c);
    }
    plain
}

/// Number of characters a line occupies once escape codes are removed
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Capitalize each word of an API name: `lightning-rod` becomes `Lightning-Rod`
pub fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    titled
}
