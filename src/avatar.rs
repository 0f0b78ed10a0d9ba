//! Avatar generation for authors and commenters
//!
//! Deterministic initials-on-pastel SVG avatars for accounts without an
//! uploaded image.

use maud::{html, Markup, PreEscaped};

const COLORS: &[&str] = &[
    "#dc8a78", "#ea76cb", "#ca9ee6", "#b4befe", "#8caaee", "#74c7ec", "#81c8be", "#94e2d5",
    "#a6d189", "#c6d57e", "#e5c890", "#ef9f76", "#eba0ac", "#f4b8e4", "#99d1db", "#babbf1",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercased initials from a display name.
///
/// Takes the first character of the first two whitespace-separated words,
/// or the first character alone for single-word names. Empty names get a
/// question mark so the avatar never renders blank.
fn initials(name: &str) -> String {
    let mut letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        letters.push('?');
    }
    letters
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let h = hash(name);
    let bg = COLORS[(h % COLORS.len() as u64) as usize];
    let fg = COLORS[((h >> 7) % COLORS.len() as u64) as usize];
    let letters = initials(name);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><rect width="100" height="100" rx="50" fill="{bg}"/><circle cx="50" cy="50" r="46" fill="white" opacity="0.25"/><text x="50" y="50" dy="0.36em" text-anchor="middle" font-family="system-ui, sans-serif" font-weight="600" font-size="42" fill="{fg}" stroke="#4c4f69" stroke-width="0.5">{letters}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(name, size))) } }
}
