use serde::{Deserialize, Serialize};
use std::fmt;

/// The two families of goods handled by the coordination service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Supplies,
    Blood,
}

/// Kind-specific payload carried by both requests and donations.
///
/// Serialized with a `kind` tag next to the owning entity's fields, e.g.
/// `{"kind": "blood", "bloodGroup": "O+", "units": 2, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDetails {
    #[serde(rename_all = "camelCase")]
    Supplies {
        item_name: String,
        #[serde(default)]
        category: String,
        quantity: u32,
    },
    #[serde(rename_all = "camelCase")]
    Blood { blood_group: String, units: u32 },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Supplies { .. } => ItemKind::Supplies,
            ItemDetails::Blood { .. } => ItemKind::Blood,
        }
    }

    /// Category of a supplies item. Blood has none.
    pub fn category(&self) -> Option<&str> {
        match self {
            ItemDetails::Supplies { category, .. } => Some(category),
            ItemDetails::Blood { .. } => None,
        }
    }

    /// Item name for supplies, blood group for blood.
    pub fn label(&self) -> &str {
        match self {
            ItemDetails::Supplies { item_name, .. } => item_name,
            ItemDetails::Blood { blood_group, .. } => blood_group,
        }
    }

    /// Quantity for supplies, units for blood.
    pub fn amount(&self) -> u32 {
        match self {
            ItemDetails::Supplies { quantity, .. } => *quantity,
            ItemDetails::Blood { units, .. } => *units,
        }
    }

    /// Returns the wire name of the first required field that is blank or zero.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        match self {
            ItemDetails::Supplies {
                item_name,
                quantity,
                ..
            } => {
                if item_name.trim().is_empty() {
                    Some("itemName")
                } else if *quantity == 0 {
                    Some("quantity")
                } else {
                    None
                }
            }
            ItemDetails::Blood { blood_group, units } => {
                if blood_group.trim().is_empty() {
                    Some("bloodGroup")
                } else if *units == 0 {
                    Some("units")
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl Location {
    pub fn new(city: &str, state: &str) -> Self {
        Location {
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}
