//! Product — a catalog item listed in the shop's gallery.
//!
//! Every descriptive field is optional: a product may be created with any
//! subset of title, image, price and category.

use serde::{Deserialize, Serialize};

use crate::error::{ShopfrontError, ValidationError};
use crate::id::ProductId;
use crate::time::{Timestamp, now};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL or path of the product picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::Validation`] when `price` is NaN or infinite.
    pub fn validate(&self) -> Result<(), ShopfrontError> {
        if self.price.is_some_and(|price| !price.is_finite()) {
            return Err(ValidationError::InvalidPrice.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Product`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    title: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    category: Option<String>,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set every descriptive field at once, clearing the ones that are `None`.
    #[must_use]
    pub fn fields(
        mut self,
        title: Option<String>,
        image: Option<String>,
        price: Option<f64>,
        category: Option<String>,
    ) -> Self {
        self.title = title;
        self.image = image;
        self.price = price;
        self.category = category;
        self
    }

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::Validation`] if the price is not finite.
    pub fn build(self) -> Result<Product, ShopfrontError> {
        let timestamp = now();
        let product = Product {
            id: self.id.unwrap_or_default(),
            title: self.title,
            image: self.image,
            price: self.price,
            category: self.category,
            created_at: timestamp,
            updated_at: timestamp,
        };
        product.validate()?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_product_with_all_fields() {
        let product = Product::builder()
            .title("Plate")
            .image("/p.jpg")
            .price(250.0)
            .category("Plates")
            .build()
            .unwrap();

        assert_eq!(product.title.as_deref(), Some("Plate"));
        assert_eq!(product.image.as_deref(), Some("/p.jpg"));
        assert_eq!(product.price, Some(250.0));
        assert_eq!(product.category.as_deref(), Some("Plates"));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_build_product_without_any_field() {
        let product = Product::builder().build().unwrap();
        assert!(product.title.is_none());
        assert!(product.price.is_none());
    }

    #[test]
    fn should_reject_non_finite_price() {
        let result = Product::builder().price(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ShopfrontError::Validation(ValidationError::InvalidPrice))
        ));
    }

    #[test]
    fn should_clear_fields_when_replaced_with_none() {
        let product = Product::builder()
            .title("Bowl")
            .fields(None, Some("/b.jpg".to_string()), None, None)
            .build()
            .unwrap();

        assert!(product.title.is_none());
        assert_eq!(product.image.as_deref(), Some("/b.jpg"));
    }

    #[test]
    fn should_serialize_with_camel_case_and_skip_missing_fields() {
        let product = Product::builder().title("Cup").build().unwrap();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["title"], "Cup");
        assert!(json.get("price").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
