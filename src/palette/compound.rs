//! Tyre compound colours

/// `(compound, hex colour)`
pub const COMPOUND_COLORS: [(&str, &str); 6] = [
    ("SOFT", "#EF4444"),
    ("MEDIUM", "#FCD34D"),
    ("HARD", "#FFFFFF"),
    ("INTERMEDIATE", "#22C55E"),
    ("WET", "#3B82F6"),
    ("TEST", "#A78BFA"),
];

/// Colour for compounds outside [`COMPOUND_COLORS`]
pub const UNKNOWN_COMPOUND_COLOR: &str = "#9CA3AF";

/// Colour for a compound name, case-insensitively.
pub fn compound_color(compound: Option<&str>) -> &'static str {
    compound
        .and_then(|name| {
            COMPOUND_COLORS.iter().find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
        })
        .map(|(_, color)| *color)
        .unwrap_or(UNKNOWN_COMPOUND_COLOR)
}
