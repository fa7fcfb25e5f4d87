use moonlight::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(crate = "serde")]
pub struct Color {
    pub id: usize,
    pub name: String,
    pub is_primary: bool,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// CSS hex notation, e.g. `#ff8000`.
    pub fn hex_code(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
