//! Display attributes for categories and tiers.
//!
//! Every view that labels, colors or decorates a category reads this table
//! instead of matching on the category itself.

use crate::model::Category;
use crate::routine::Tier;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub category: Category,
    pub label: &'static str,
    /// Icon name from the lucide set.
    pub icon: &'static str,
    /// Base color name; badges use the 100/800 shades, bars the 400 shade.
    pub color: &'static str,
    pub blurb: &'static str,
}

impl CategoryStyle {
    pub fn badge_class(&self) -> String {
        format!("bg-{0}-100 text-{0}-800", self.color)
    }

    pub fn bar_class(&self) -> String {
        format!("bg-{}-400", self.color)
    }
}

const STYLES: [CategoryStyle; 4] = [
    CategoryStyle {
        category: Category::Humectant,
        label: "Humectant",
        icon: "droplets",
        color: "sky",
        blurb: "Attracts water to skin",
    },
    CategoryStyle {
        category: Category::Moisturizer,
        label: "Moisturizer",
        icon: "waves",
        color: "emerald",
        blurb: "Repairs skin barrier",
    },
    CategoryStyle {
        category: Category::Emollient,
        label: "Emollient",
        icon: "sparkles",
        color: "amber",
        blurb: "Softens skin",
    },
    CategoryStyle {
        category: Category::Occlusive,
        label: "Occlusive",
        icon: "shield",
        color: "purple",
        blurb: "Seals in moisture",
    },
];

impl Category {
    pub fn style(self) -> &'static CategoryStyle {
        &STYLES[self as usize]
    }
}

impl Tier {
    /// Text color for a score in this tier.
    pub fn color(self) -> &'static str {
        match self {
            Tier::Excellent => "green",
            Tier::Good => "emerald",
            Tier::Fair => "amber",
            Tier::Poor => "red",
        }
    }

    pub fn text_class(self) -> String {
        format!("text-{}-600", self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_by_category() {
        for category in Category::ALL {
            assert_eq!(category.style().category, category);
            assert_eq!(category.style().label, category.to_string());
        }
    }

    #[test]
    fn test_classes() {
        let occlusive = Category::Occlusive.style();
        assert_eq!(occlusive.badge_class(), "bg-purple-100 text-purple-800");
        assert_eq!(occlusive.bar_class(), "bg-purple-400");
        assert_eq!(Tier::Fair.text_class(), "text-amber-600");
    }
}
