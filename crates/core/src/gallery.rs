//! Product gallery with category filtering

use std::fmt;

use itertools::Itertools;

use crate::error::Error;
use crate::models::Product;
use crate::result::Result;

/// Label of the "show everything" filter button
pub const ALL_CATEGORIES_LABEL: &str = "הכל";

/// Active filter value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No filter applied
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Button label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Named(name) => name,
        }
    }

    /// Check if a product passes this filter (exact string equality)
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category == *name,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Products plus the currently selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    products: Vec<Product>,
    categories: Vec<Category>,
    selected: Category,
}

impl Gallery {
    /// Builds the gallery; categories keep first-seen order
    ///
    /// [`ALL_CATEGORIES_LABEL`] is reserved: a product filed under it gets no
    /// pill of its own and only shows under "all".
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let categories = std::iter::once(Category::All)
            .chain(
                products
                    .iter()
                    .map(|product| product.category.as_str())
                    .filter(|name| *name != ALL_CATEGORIES_LABEL)
                    .unique()
                    .map(|name| Category::Named(name.to_string())),
            )
            .collect();

        Self {
            products,
            categories,
            selected: Category::All,
        }
    }

    /// Filter buttons, "all" first
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub const fn selected(&self) -> &Category {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, category: &Category) -> bool {
        self.selected == *category
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sets the active category
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if no product carries the category;
    /// the current selection is kept.
    pub fn select(&mut self, category: Category) -> Result<()> {
        if !self.categories.contains(&category) {
            tracing::warn!(category = %category, "rejected unknown category");
            return Err(Error::unknown_category(category.label()));
        }
        tracing::debug!(category = %category, "category selected");
        self.selected = category;
        Ok(())
    }

    /// Products passing the active filter, in catalogue order
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.selected.matches(product))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "a", "x"),
            Product::new(2, "b", "y"),
            Product::new(3, "c", "x"),
        ]
    }

    #[test]
    fn test_categories_prefixed_with_all() {
        let gallery = Gallery::new(sample());
        let labels: Vec<_> = gallery.categories().iter().map(Category::label).collect();
        assert_eq!(labels, vec![ALL_CATEGORIES_LABEL, "x", "y"]);
    }

    #[test]
    fn test_default_selection_shows_everything() {
        let gallery = Gallery::new(sample());
        assert_eq!(gallery.selected(), &Category::All);
        assert_eq!(gallery.visible().len(), 3);
    }

    #[test]
    fn test_select_filters_in_order() {
        let mut gallery = Gallery::new(sample());
        gallery.select(Category::from("x")).unwrap();
        let ids: Vec<_> = gallery.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(gallery.is_selected(&Category::Named("x".to_string())));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut gallery = Gallery::new(sample());
        gallery.select(Category::from("y")).unwrap();

        let result = gallery.select(Category::from("z"));
        assert_eq!(result, Err(Error::UnknownCategory("z".to_string())));
        assert_eq!(gallery.selected(), &Category::from("y"));
    }

    #[test]
    fn test_all_label_parses_to_sentinel() {
        assert_eq!(Category::from(ALL_CATEGORIES_LABEL), Category::All);
        assert_eq!(Category::All.to_string(), ALL_CATEGORIES_LABEL);
    }

    #[test]
    fn test_reserved_all_label_gets_no_second_pill() {
        let mut gallery = Gallery::new(vec![
            Product::new(1, "a", ALL_CATEGORIES_LABEL),
            Product::new(2, "b", "x"),
        ]);
        assert_eq!(
            gallery.categories(),
            &[Category::All, Category::Named("x".to_string())]
        );

        let result = gallery.select(Category::Named(ALL_CATEGORIES_LABEL.to_string()));
        assert!(result.is_err());
        assert_eq!(gallery.visible().len(), 2);
    }

    #[test]
    fn test_empty_gallery_has_only_all() {
        let gallery = Gallery::new(Vec::new());
        assert_eq!(gallery.categories(), &[Category::All]);
        assert!(gallery.visible().is_empty());
    }
}
