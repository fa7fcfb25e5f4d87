use shared::Color;

// name, is_primary, red, green, blue
const SEED: [(&str, bool, u8, u8, u8); 8] = [
    ("Red", true, 255, 0, 0),
    ("Green", true, 0, 255, 0),
    ("Blue", true, 0, 0, 255),
    ("Orange", false, 255, 165, 0),
    ("Purple", false, 128, 0, 128),
    ("Teal", false, 0, 128, 128),
    ("Slate", false, 112, 128, 144),
    ("Gold", false, 255, 215, 0),
];

/// The palette served to clients. Ids start at 1 and double as route segments.
pub fn colors() -> Vec<Color> {
    SEED.iter()
        .enumerate()
        .map(|(index, &(name, is_primary, red, green, blue))| Color {
            id: index + 1,
            name: name.to_string(),
            is_primary,
            red,
            green,
            blue,
        })
        .collect()
}
