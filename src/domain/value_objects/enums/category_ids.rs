use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Coffee,
    Barber,
    Food,
    Fitness,
    Beauty,
    Pharmacy,
    Retail,
    Other,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Coffee => "coffee",
            CategoryId::Barber => "barber",
            CategoryId::Food => "food",
            CategoryId::Fitness => "fitness",
            CategoryId::Beauty => "beauty",
            CategoryId::Pharmacy => "pharmacy",
            CategoryId::Retail => "retail",
            CategoryId::Other => "other",
        }
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
