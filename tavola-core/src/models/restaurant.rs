//! Restaurant profile and the aggregate document published by the
//! remote store.
//!
//! Field names follow the document as stored remotely (`Config`,
//! `Testimonials`, `story`), so a fetched snapshot deserializes
//! without a mapping layer.

use serde::{Deserialize, Serialize};

use super::menu::{Category, MenuItem};

/// Opening hours for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub day: String,
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// A time-limited promotion shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOffer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Restaurant profile: identity, contact info, hours and theming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantConfig {
    pub name: String,
    pub logo: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub social_media: SocialMedia,
    pub business_hours: Vec<BusinessHours>,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub special_offers: Vec<SpecialOffer>,
}

/// A customer testimonial shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The single remote document backing the whole site: profile, menu,
/// categories, testimonials and narrative text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RestaurantDocument {
    #[serde(rename = "Config", skip_serializing_if = "Option::is_none")]
    pub config: Option<RestaurantConfig>,
    pub menu: Vec<MenuItem>,
    pub categories: Vec<Category>,
    #[serde(rename = "Testimonials")]
    pub testimonials: Vec<Testimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
}

impl RestaurantDocument {
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.id == id)
    }

    /// Categories in display order.
    pub fn sorted_categories(&self) -> Vec<&Category> {
        let mut cats: Vec<&Category> = self.categories.iter().collect();
        cats.sort_by_key(|c| c.order);
        cats
    }

    /// Menu items flagged for the home page.
    pub fn featured_items(&self) -> Vec<&MenuItem> {
        self.menu.iter().filter(|m| m.featured).collect()
    }

    /// Menu items belonging to a category id.
    pub fn items_in_category(&self, category: &str) -> Vec<&MenuItem> {
        self.menu.iter().filter(|m| m.category == category).collect()
    }
}
