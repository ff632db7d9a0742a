//! Catalog models: menu items and display categories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::money;

/// A selectable choice within a menu item option group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionChoice {
    pub name: String,
    /// Surcharge added to the base price when selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// An option group on a menu item, e.g. "Size" with its choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemOption {
    pub name: String,
    pub choices: Vec<OptionChoice>,
}

/// A menu item as published in the restaurant document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ItemOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<String>>,
}

impl MenuItem {
    /// Unit price for a given option selection: the base price plus the
    /// surcharge of every selected choice. Selections that name an
    /// unknown option or choice contribute nothing.
    pub fn unit_price(&self, selected: &BTreeMap<String, String>) -> f64 {
        let mut total = money::to_decimal(self.price);
        if let Some(options) = &self.options {
            for option in options {
                let Some(choice_name) = selected.get(&option.name) else {
                    continue;
                };
                let surcharge = option
                    .choices
                    .iter()
                    .find(|c| &c.name == choice_name)
                    .and_then(|c| c.price);
                if let Some(price) = surcharge {
                    total += money::to_decimal(price);
                }
            }
        }
        money::to_f64(total)
    }

    /// Whether a selection names only options and choices this item has.
    pub fn selection_is_valid(&self, selected: &BTreeMap<String, String>) -> bool {
        selected.iter().all(|(name, choice)| {
            self.options
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|o| &o.name == name && o.choices.iter().any(|c| &c.name == choice))
        })
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:.2}", self.name, self.price)?;
        if self.featured {
            write!(f, " (featured)")?;
        }
        Ok(())
    }
}

/// A display category for grouping menu items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display position, ascending
    #[serde(default)]
    pub order: i32,
}
