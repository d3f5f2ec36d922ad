//! Shop info — the shop's name and contact details.
//!
//! At most one record exists. Writes go through an upsert: the first one
//! creates the record, later ones overwrite its fields while keeping its id
//! and creation time.

use serde::{Deserialize, Serialize};

use crate::id::ShopInfoId;
use crate::time::{Timestamp, now};

/// The singleton shop description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    pub id: ShopInfoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `WhatsApp` contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShopInfo {
    /// Create a builder for constructing a [`ShopInfo`].
    #[must_use]
    pub fn builder() -> ShopInfoBuilder {
        ShopInfoBuilder::default()
    }
}

/// Step-by-step builder for [`ShopInfo`].
#[derive(Debug, Default)]
pub struct ShopInfoBuilder {
    shop_name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    whatsapp: Option<String>,
}

impl ShopInfoBuilder {
    #[must_use]
    pub fn shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = Some(shop_name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = Some(whatsapp.into());
        self
    }

    /// Set every field at once, clearing the ones that are `None`.
    #[must_use]
    pub fn fields(
        mut self,
        shop_name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
        whatsapp: Option<String>,
    ) -> Self {
        self.shop_name = shop_name;
        self.address = address;
        self.phone = phone;
        self.whatsapp = whatsapp;
        self
    }

    /// Consume the builder and return a [`ShopInfo`] with a fresh id.
    ///
    /// Storage keeps the existing id and `created_at` when a record is
    /// already present, so the values produced here only stick on first write.
    #[must_use]
    pub fn build(self) -> ShopInfo {
        let timestamp = now();
        ShopInfo {
            id: ShopInfoId::new(),
            shop_name: self.shop_name,
            address: self.address,
            phone: self.phone,
            whatsapp: self.whatsapp,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_shop_info_with_contact_details() {
        let info = ShopInfo::builder()
            .shop_name("Crockery House")
            .address("Main Bazaar, Lahore")
            .phone("042-1234567")
            .whatsapp("+92 300 1234567")
            .build();

        assert_eq!(info.shop_name.as_deref(), Some("Crockery House"));
        assert_eq!(info.whatsapp.as_deref(), Some("+92 300 1234567"));
    }

    #[test]
    fn should_clear_fields_when_replaced_with_none() {
        let info = ShopInfo::builder()
            .shop_name("Old Name")
            .fields(None, Some("Anarkali".to_string()), None, None)
            .build();

        assert!(info.shop_name.is_none());
        assert_eq!(info.address.as_deref(), Some("Anarkali"));
    }

    #[test]
    fn should_use_camel_case_field_names() {
        let info = ShopInfo::builder().shop_name("Crockery House").build();
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["shopName"], "Crockery House");
        assert!(json.get("shop_name").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn should_deserialize_payload_with_missing_fields() {
        let json = format!(
            r#"{{"id":"{}","address":"Anarkali","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}}"#,
            ShopInfoId::new()
        );
        let info: ShopInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.address.as_deref(), Some("Anarkali"));
        assert!(info.shop_name.is_none());
    }
}
