use serde::{Deserialize, Serialize};

// Product - a read-only snapshot of a catalog item as returned by the upstream API.
// Nothing here is owned or validated locally; optional upstream fields default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: i64,
    // some upstream categories (groceries) carry no brand
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub warranty_information: Option<String>,
    #[serde(default)]
    pub shipping_information: Option<String>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub return_policy: Option<String>,
    #[serde(default)]
    pub minimum_order_quantity: Option<i64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub qr_code: Option<String>,
}

/// One page of products with the upstream pagination counters, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl Listing {
    /// Fallback used when a category page cannot be fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_decodes_upstream_shape() {
        let payload = json!({
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "sku": "RCH45Q1A",
            "weight": 2,
            "dimensions": {"width": 23.17, "height": 14.43, "depth": 28.01},
            "warrantyInformation": "1 month warranty",
            "shippingInformation": "Ships in 1 month",
            "availabilityStatus": "Low Stock",
            "reviews": [{
                "rating": 2,
                "comment": "Very unhappy with my purchase!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "John Doe",
                "reviewerEmail": "john.doe@x.dummyjson.com"
            }],
            "returnPolicy": "30 days return policy",
            "minimumOrderQuantity": 24,
            "meta": {
                "createdAt": "2024-05-23T08:56:21.618Z",
                "updatedAt": "2024-05-23T08:56:21.618Z",
                "barcode": "9164035109868",
                "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
            },
            "images": ["https://cdn.dummyjson.com/products/images/beauty/1.png"],
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png"
        });

        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.reviews[0].reviewer_name, "John Doe");
        assert_eq!(product.dimensions.unwrap().depth, 28.01);
        assert_eq!(product.meta.unwrap().barcode.as_deref(), Some("9164035109868"));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let payload = json!({
            "id": 16,
            "title": "Apple",
            "description": "Fresh apples.",
            "category": "groceries",
            "price": 1.99,
            "discountPercentage": 0,
            "rating": 4.19,
            "stock": 0,
            "images": [],
            "thumbnail": "https://cdn.dummyjson.com/apple.png"
        });

        let product: Product = serde_json::from_value(payload).unwrap();
        assert!(product.brand.is_none());
        assert!(product.reviews.is_empty());
        assert!(product.meta.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let payload = json!({"id": 3, "title": "No price"});
        assert!(serde_json::from_value::<Product>(payload).is_err());
    }
}
