//! # Lexical utilities (spec.md §4.2)
//!
//! UTF-8-aware string escaping, better-quote selection, and shortest-decimal
//! number formatting. Pure functions only — no state, grounded in the
//! teacher's `Printer::choose_quote_character`/`escape_string` but extended
//! to match the full escaping and numeric-disambiguation rules this spec
//! requires.
//!
//! Rust strings are always valid UTF-8, which is a strict subset of the
//! WTF-8 the original system tolerates (WTF-8 additionally allows unpaired
//! surrogates). Unpaired surrogates cannot occur in a `&str`, so the "drop
//! malformed bytes" rule in spec.md §4.2 has nothing to do here; it would
//! only become relevant if this crate accepted raw bytes instead of `&str`.

/// Picks `'` or `"` for a string's quote character: the quote whose count in
/// `content` is less than or equal to the other's. Ties favor `"`.
pub fn choose_quote(content: &str) -> char {
    let singles = content.chars().filter(|&c| c == '\'').count();
    let doubles = content.chars().filter(|&c| c == '"').count();
    if singles <= doubles {
        '\''
    } else {
        '"'
    }
}

/// Escapes `content` for inclusion inside a string literal delimited by
/// `quote`, per the character classes in spec.md §4.2.
pub fn escape_string(content: &str, quote: char) -> String {
    let mut out = String::with_capacity(content.len() + 2);
    for ch in content.chars() {
        escape_char(ch, quote, &mut out);
    }
    out
}

fn escape_char(ch: char, quote: char, out: &mut String) {
    match ch {
        '\0' => out.push_str("\\0"),
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{b}' => out.push_str("\\v"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if (' '..='~').contains(&c) => out.push(c),
        c if (c as u32) <= 0xFF => out.push_str(&format!("\\x{:02X}", c as u32)),
        c if (c as u32) <= 0xFFFF => out.push_str(&format!("\\u{:04X}", c as u32)),
        c => {
            // Non-BMP: emit as a UTF-16 surrogate pair, never `\u{...}`.
            let v = c as u32 - 0x10000;
            let high = 0xD800 + (v >> 10);
            let low = 0xDC00 + (v & 0x3FF);
            out.push_str(&format!("\\u{:04X}\\u{:04X}", high, low));
        }
    }
}

/// Escapes template-literal quasi content: backtick, backslash, and a
/// literal `${` sequence (which would otherwise start a substitution).
pub fn escape_template_element(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' if chars.peek() == Some(&'{') => {
                out.push_str("\\${");
                chars.next();
            }
            c => out.push(c),
        }
    }
    out
}

/// The shortest decimal string that round-trips to `value` (spec.md §4.2,
/// §8 "numeric round-trip"). Rust's `f64` `Display` already produces the
/// shortest round-trippable digit sequence; this wraps it with the
/// scientific-notation thresholds JavaScript's `Number::toString` applies
/// (`>= 1e21` or `< 1e-6` in magnitude) since Rust's plain `Display` never
/// switches to exponential form.
pub fn shortest_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        format_exponential(value)
    } else {
        format!("{}", value)
    }
}

fn format_exponential(value: f64) -> String {
    let formatted = format!("{:e}", value);
    // Rust emits e.g. "1.5e-7" or "1e21"; JavaScript requires an explicit
    // `+` before a non-negative exponent ("1.5e-7", "1e+21").
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Numeric-literal-as-member-object disambiguation (spec.md §4.2): applies
/// only when a numeric literal is the object of a non-computed member
/// access, where a bare integer like `1` would otherwise read as `1.foo`
/// (a malformed number token followed by an identifier).
pub fn disambiguate_numeric_member_object(raw: &str, shortest: &str, pretty: bool) -> NumericObjectForm {
    if pretty {
        if !raw.contains('.') && !raw.contains('e') && !raw.contains('E') {
            NumericObjectForm::Parenthesized(raw.to_string())
        } else {
            NumericObjectForm::Plain(raw.to_string())
        }
    } else if !shortest.contains('.') && !shortest.contains('e') {
        NumericObjectForm::TrailingDot(shortest.to_string())
    } else {
        NumericObjectForm::Plain(shortest.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericObjectForm {
    /// Emit as-is; the following `.`/`[` already disambiguates.
    Plain(String),
    /// Emit with a trailing `.` appended so the member-access dot cannot
    /// fuse into a decimal point (`1` + `.` + `.foo` = `1..foo`).
    TrailingDot(String),
    /// Emit the raw text wrapped in parens (`(1).foo`).
    Parenthesized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_selection_prefers_fewer_escapes() {
        assert_eq!(choose_quote("it's a \"test\""), '"');
        assert_eq!(choose_quote("no quotes here"), '\'');
        assert_eq!(choose_quote("tie 'and' \"and\""), '"');
    }

    #[test]
    fn escapes_named_control_characters() {
        assert_eq!(escape_string("a\nb\tc", '\''), "a\\nb\\tc");
        assert_eq!(escape_string("\0", '\''), "\\0");
    }

    #[test]
    fn escapes_the_chosen_quote_and_backslash() {
        assert_eq!(escape_string("it's", '\''), "it\\'s");
        assert_eq!(escape_string("a\\b", '"'), "a\\\\b");
    }

    #[test]
    fn escapes_latin1_supplement_as_hex() {
        assert_eq!(escape_string("\u{e9}", '\''), "\\xE9");
    }

    #[test]
    fn escapes_bmp_as_unicode() {
        assert_eq!(escape_string("\u{2028}", '\''), "\\u2028");
    }

    #[test]
    fn escapes_non_bmp_as_surrogate_pair() {
        // U+1F4A9 PILE OF POO
        assert_eq!(escape_string("\u{1F4A9}", '"'), "\\uD83D\\uDCA9");
    }

    #[test]
    fn shortest_number_round_trips_integers_and_floats() {
        assert_eq!(shortest_number(5.0), "5");
        assert_eq!(shortest_number(0.1), "0.1");
        assert_eq!(shortest_number(-42.0), "-42");
    }

    #[test]
    fn shortest_number_uses_exponential_outside_thresholds() {
        assert_eq!(shortest_number(1e21), "1e+21");
        assert_eq!(shortest_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn numeric_member_object_disambiguation() {
        assert_eq!(
            disambiguate_numeric_member_object("1", "1", false),
            NumericObjectForm::TrailingDot("1".to_string())
        );
        assert_eq!(
            disambiguate_numeric_member_object("1", "1", true),
            NumericObjectForm::Parenthesized("1".to_string())
        );
        assert_eq!(
            disambiguate_numeric_member_object("1.5", "1.5", true),
            NumericObjectForm::Plain("1.5".to_string())
        );
    }
}
