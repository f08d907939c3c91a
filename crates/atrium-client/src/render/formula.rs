//! Best-effort physics formula detection in message text.
//!
//! A message containing something shaped like `F = ma` gets the matched
//! span surfaced inline next to the content.  This is a display nicety with
//! no contract: it may both false-positive and false-negative.

/// Find the first `letter = token` shape in `content`.
///
/// The match starts at a single alphabetic character (Greek symbols
/// included), allows spaces around the `=`, and extends over the
/// alphanumeric token (superscripts and fractions included) that follows.
pub fn detect(content: &str) -> Option<String> {
    let chars: Vec<char> = content.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c != '=' {
            continue;
        }

        // Walk left over spaces to the symbol being defined.
        let mut left = i;
        while left > 0 && chars[left - 1] == ' ' {
            left -= 1;
        }
        if left == 0 || !chars[left - 1].is_alphabetic() {
            continue;
        }

        // Walk right over spaces to the start of the expression.
        let mut right = i + 1;
        while right < chars.len() && chars[right] == ' ' {
            right += 1;
        }
        if right >= chars.len() || !chars[right].is_alphanumeric() {
            continue;
        }

        // Take the whole token.
        let mut end = right;
        while end < chars.len() && chars[end].is_alphanumeric() {
            end += 1;
        }

        return Some(chars[left - 1..end].iter().collect());
    }

    None
}

/// Formulas offered by the composer's quick-insert helper.
pub const COMMON_FORMULAS: &[&str] = &[
    "F = ma",
    "E = mc²",
    "V = IR",
    "P = W/t",
    "v = u + at",
    "λ = v/f",
    "KE = ½mv²",
    "PV = nRT",
];
