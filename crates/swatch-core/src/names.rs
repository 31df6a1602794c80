//! Named reference colors and nearest-name lookup.

use crate::convert::hex_to_rgb;
use crate::types::{normalize_hex, Rgb};

/// Reference colors as `(hex, name)`, ordered by hex. Lookup ties resolve to
/// the earlier entry.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "Black"),
    ("#000080", "Navy"),
    ("#00008B", "Dark Blue"),
    ("#0000CD", "Medium Blue"),
    ("#0000FF", "Blue"),
    ("#006400", "Dark Green"),
    ("#008000", "Green"),
    ("#008080", "Teal"),
    ("#008B8B", "Dark Cyan"),
    ("#00BFFF", "Deep Sky Blue"),
    ("#00CED1", "Dark Turquoise"),
    ("#00FA9A", "Medium Spring Green"),
    ("#00FF00", "Lime"),
    ("#00FF7F", "Spring Green"),
    ("#00FFFF", "Cyan"),
    ("#191970", "Midnight Blue"),
    ("#1E90FF", "Dodger Blue"),
    ("#20B2AA", "Light Sea Green"),
    ("#228B22", "Forest Green"),
    ("#2E8B57", "Sea Green"),
    ("#2F4F4F", "Dark Slate Gray"),
    ("#32CD32", "Lime Green"),
    ("#3CB371", "Medium Sea Green"),
    ("#40E0D0", "Turquoise"),
    ("#4169E1", "Royal Blue"),
    ("#4682B4", "Steel Blue"),
    ("#483D8B", "Dark Slate Blue"),
    ("#48D1CC", "Medium Turquoise"),
    ("#4B0082", "Indigo"),
    ("#556B2F", "Dark Olive Green"),
    ("#5F9EA0", "Cadet Blue"),
    ("#6495ED", "Cornflower Blue"),
    ("#663399", "Rebecca Purple"),
    ("#66CDAA", "Medium Aquamarine"),
    ("#696969", "Dim Gray"),
    ("#6A5ACD", "Slate Blue"),
    ("#6B8E23", "Olive Drab"),
    ("#708090", "Slate Gray"),
    ("#778899", "Light Slate Gray"),
    ("#7B68EE", "Medium Slate Blue"),
    ("#7CFC00", "Lawn Green"),
    ("#7FFF00", "Chartreuse"),
    ("#7FFFD4", "Aquamarine"),
    ("#800000", "Maroon"),
    ("#800080", "Purple"),
    ("#808000", "Olive"),
    ("#808080", "Gray"),
    ("#87CEEB", "Sky Blue"),
    ("#87CEFA", "Light Sky Blue"),
    ("#8A2BE2", "Blue Violet"),
    ("#8B0000", "Dark Red"),
    ("#8B008B", "Dark Magenta"),
    ("#8B4513", "Saddle Brown"),
    ("#8FBC8F", "Dark Sea Green"),
    ("#90EE90", "Light Green"),
    ("#9370DB", "Medium Purple"),
    ("#9400D3", "Dark Violet"),
    ("#98FB98", "Pale Green"),
    ("#9932CC", "Dark Orchid"),
    ("#9ACD32", "Yellow Green"),
    ("#A0522D", "Sienna"),
    ("#A52A2A", "Brown"),
    ("#A9A9A9", "Dark Gray"),
    ("#ADD8E6", "Light Blue"),
    ("#ADFF2F", "Green Yellow"),
    ("#AFEEEE", "Pale Turquoise"),
    ("#B0C4DE", "Light Steel Blue"),
    ("#B0E0E6", "Powder Blue"),
    ("#B22222", "Firebrick"),
    ("#B8860B", "Dark Goldenrod"),
    ("#BA55D3", "Medium Orchid"),
    ("#BC8F8F", "Rosy Brown"),
    ("#BDB76B", "Dark Khaki"),
    ("#C0C0C0", "Silver"),
    ("#C71585", "Medium Violet Red"),
    ("#CD5C5C", "Indian Red"),
    ("#CD853F", "Peru"),
    ("#D2691E", "Chocolate"),
    ("#D2B48C", "Tan"),
    ("#D3D3D3", "Light Gray"),
    ("#D8BFD8", "Thistle"),
    ("#DA70D6", "Orchid"),
    ("#DAA520", "Goldenrod"),
    ("#DB7093", "Pale Violet Red"),
    ("#DC143C", "Crimson"),
    ("#DCDCDC", "Gainsboro"),
    ("#DDA0DD", "Plum"),
    ("#DEB887", "Burlywood"),
    ("#E0FFFF", "Light Cyan"),
    ("#E6E6FA", "Lavender"),
    ("#E9967A", "Dark Salmon"),
    ("#EE82EE", "Violet"),
    ("#EEE8AA", "Pale Goldenrod"),
    ("#F08080", "Light Coral"),
    ("#F0E68C", "Khaki"),
    ("#F0F8FF", "Alice Blue"),
    ("#F0FFF0", "Honeydew"),
    ("#F0FFFF", "Azure"),
    ("#F4A460", "Sandy Brown"),
    ("#F5DEB3", "Wheat"),
    ("#F5F5DC", "Beige"),
    ("#F5F5F5", "White Smoke"),
    ("#F5FFFA", "Mint Cream"),
    ("#F8F8FF", "Ghost White"),
    ("#FA8072", "Salmon"),
    ("#FAEBD7", "Antique White"),
    ("#FAF0E6", "Linen"),
    ("#FAFAD2", "Light Goldenrod Yellow"),
    ("#FDF5E6", "Old Lace"),
    ("#FF0000", "Red"),
    ("#FF00FF", "Magenta"),
    ("#FF1493", "Deep Pink"),
    ("#FF4500", "Orange Red"),
    ("#FF6347", "Tomato"),
    ("#FF69B4", "Hot Pink"),
    ("#FF7F50", "Coral"),
    ("#FF8C00", "Dark Orange"),
    ("#FFA07A", "Light Salmon"),
    ("#FFA500", "Orange"),
    ("#FFB6C1", "Light Pink"),
    ("#FFC0CB", "Pink"),
    ("#FFD700", "Gold"),
    ("#FFDAB9", "Peach Puff"),
    ("#FFDEAD", "Navajo White"),
    ("#FFE4B5", "Moccasin"),
    ("#FFE4C4", "Bisque"),
    ("#FFE4E1", "Misty Rose"),
    ("#FFEBCD", "Blanched Almond"),
    ("#FFEFD5", "Papaya Whip"),
    ("#FFF0F5", "Lavender Blush"),
    ("#FFF5EE", "Seashell"),
    ("#FFF8DC", "Cornsilk"),
    ("#FFFACD", "Lemon Chiffon"),
    ("#FFFAF0", "Floral White"),
    ("#FFFAFA", "Snow"),
    ("#FFFF00", "Yellow"),
    ("#FFFFE0", "Light Yellow"),
    ("#FFFFF0", "Ivory"),
    ("#FFFFFF", "White"),
];

/// Resolve the name of the closest reference color.
///
/// An exact table hit wins outright; otherwise the entry with the smallest
/// Euclidean RGB distance is chosen. Malformed input is looked up as black.
pub fn color_name(hex: &str) -> &'static str {
    let hex = normalize_hex(hex);

    if let Some(&(_, name)) = NAMED_COLORS.iter().find(|(h, _)| *h == hex) {
        return name;
    }

    let rgb = hex_to_rgb(&hex).unwrap_or(Rgb::BLACK);
    nearest_named(rgb).1
}

/// The `(hex, name)` entry nearest to `rgb`; first entry wins ties.
pub fn nearest_named(rgb: Rgb) -> (&'static str, &'static str) {
    let mut best = NAMED_COLORS[0];
    let mut best_distance = u32::MAX;

    for &(hex, name) in NAMED_COLORS {
        let Some(candidate) = hex_to_rgb(hex) else {
            continue;
        };
        let d = rgb.distance_squared(candidate);
        if d < best_distance {
            best_distance = d;
            best = (hex, name);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_well_formed() {
        assert!(NAMED_COLORS.len() >= 130);
        let mut seen = HashSet::new();
        for (hex, name) in NAMED_COLORS {
            assert!(hex_to_rgb(hex).is_some(), "bad hex {hex}");
            assert_eq!(hex.to_ascii_uppercase(), *hex);
            assert!(seen.insert(*hex), "duplicate {hex} ({name})");
        }
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(color_name("#FF0000"), "Red");
        assert_eq!(color_name("#ff0000"), "Red");
        assert_eq!(color_name("ff0000"), "Red");
        assert_eq!(color_name("#FFFFFF"), "White");
    }

    #[test]
    fn test_nearest_match() {
        assert_eq!(color_name("#FE0001"), color_name("#FF0000"));
        assert_eq!(color_name("#010101"), "Black");
        assert_eq!(color_name("#7F7F7F"), "Gray");
    }

    #[test]
    fn test_malformed_resolves_as_black() {
        assert_eq!(color_name("not a color"), "Black");
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // Equidistant from Lawn Green (#7CFC00) and Chartreuse (#7FFF00).
        assert_eq!(nearest_named(Rgb::new(124, 255, 0)).1, "Lawn Green");
        // Equidistant from Black (#000000) and Maroon (#800000).
        assert_eq!(nearest_named(Rgb::new(64, 0, 0)).1, "Black");
    }
}
