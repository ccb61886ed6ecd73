use crate::models::{display_name, Product, Review};
use chrono::DateTime;
use serde::Serialize;

/// Price before discount: `price / (1 - discount/100)`.
///
/// `None` when there is no discount or the percentage would divide by zero
/// or flip the sign.
pub fn original_price(price: f64, discount_percentage: f64) -> Option<f64> {
    if discount_percentage <= 0.0 || discount_percentage >= 100.0 {
        return None;
    }
    Some(price / (1.0 - discount_percentage / 100.0))
}

/// Original price as shown on detail pages, e.g. `125.00`.
pub fn format_original_price(price: f64, discount_percentage: f64) -> Option<String> {
    original_price(price, discount_percentage).map(|value| format!("{:.2}", value))
}

/// Original price as shown on grid cards, rounded to a whole amount.
pub fn rounded_original_price(price: f64, discount_percentage: f64) -> Option<i64> {
    original_price(price, discount_percentage).map(|value| value.round() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Plenty,
    Low,
    Out,
}

impl StockLevel {
    pub fn from_stock(stock: i64) -> Self {
        if stock > 10 {
            Self::Plenty
        } else if stock > 0 {
            Self::Low
        } else {
            Self::Out
        }
    }
}

fn stock_label(stock: i64) -> String {
    if stock > 0 {
        format!("{} in stock", stock)
    } else {
        "Out of stock".to_string()
    }
}

/// Five booleans, `true` for a filled star.
pub fn stars(rating: f64) -> Vec<bool> {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    (0..5).map(|i| i < filled).collect()
}

/// RFC 3339 timestamps become `YYYY-MM-DD`; anything else is shown as-is.
pub fn review_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Grid card on the category page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub price: String,
    pub discount_badge: Option<i64>,
    pub original_price: Option<i64>,
    pub rating: f64,
    pub brand: Option<String>,
    pub stock_label: String,
    pub stock_level: StockLevel,
    pub href: String,
}

impl ProductCard {
    pub fn new(product: &Product, category: &str) -> Self {
        let has_discount = product.discount_percentage > 0.0;
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            thumbnail: product.thumbnail.clone(),
            price: product.price.to_string(),
            discount_badge: has_discount.then(|| product.discount_percentage.round() as i64),
            original_price: rounded_original_price(product.price, product.discount_percentage),
            rating: product.rating,
            brand: product.brand.clone(),
            stock_label: stock_label(product.stock),
            stock_level: StockLevel::from_stock(product.stock),
            href: format!("/ui/ex4/{}/{}", category, product.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub rating: f64,
    pub stars: Vec<bool>,
    pub comment: String,
    pub date: String,
    pub reviewer: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            rating: review.rating,
            stars: stars(review.rating),
            comment: review.comment.clone(),
            date: review_date(&review.date),
            reviewer: review.reviewer_name.clone(),
        }
    }
}

/// Detail view for `/ui/ex4/{category}/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_name: String,
    pub category_href: String,
    pub brand: Option<String>,
    pub price: String,
    pub discount_badge: Option<i64>,
    pub original_price: Option<String>,
    pub rating: f64,
    pub stars: Vec<bool>,
    pub review_count: usize,
    pub stock_label: String,
    pub stock_level: StockLevel,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub dimensions: Option<String>,
    pub warranty: Option<String>,
    pub shipping: Option<String>,
    pub return_policy: Option<String>,
    pub reviews: Vec<ReviewView>,
}

impl ProductDetail {
    pub const MAX_REVIEWS: usize = 3;
    pub const MAX_IMAGES: usize = 4;

    /// `category` is the slug from the request path, which names the breadcrumb.
    pub fn new(product: &Product, category: &str) -> Self {
        let has_discount = product.discount_percentage > 0.0;
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            category: category.to_string(),
            category_name: display_name(category),
            category_href: format!("/ui/ex4/{}", category),
            brand: product.brand.clone(),
            price: product.price.to_string(),
            discount_badge: has_discount.then(|| product.discount_percentage.round() as i64),
            original_price: format_original_price(product.price, product.discount_percentage),
            rating: product.rating,
            stars: stars(product.rating),
            review_count: product.reviews.len(),
            stock_label: stock_label(product.stock),
            stock_level: StockLevel::from_stock(product.stock),
            thumbnail: product.thumbnail.clone(),
            images: product
                .images
                .iter()
                .take(Self::MAX_IMAGES)
                .cloned()
                .collect(),
            tags: product.tags.clone(),
            dimensions: product
                .dimensions
                .as_ref()
                .map(|d| format!("{}×{}×{}cm", d.width, d.height, d.depth)),
            warranty: product.warranty_information.clone(),
            shipping: product.shipping_information.clone(),
            return_policy: product.return_policy.clone(),
            reviews: product
                .reviews
                .iter()
                .take(Self::MAX_REVIEWS)
                .map(ReviewView::from)
                .collect(),
        }
    }
}
