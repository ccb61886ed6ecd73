use crate::models::Category;
use serde::Serialize;

const PLACEHOLDER_IMAGE: &str = "https://dummyjson.com/image/300x200/d9f99d/000000";

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    pub slug: String,
    pub name: String,
    pub url: String,
    pub image: String,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.clone(),
            name: category.name.clone(),
            url: category.url.clone(),
            image: format!(
                "{}?text={}",
                PLACEHOLDER_IMAGE,
                urlencoding::encode(&category.name)
            ),
        }
    }
}

pub fn cards(categories: &[Category]) -> Vec<CategoryCard> {
    categories.iter().map(CategoryCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_uses_display_name_for_placeholder_text() {
        let card = CategoryCard::from(&Category::from_slug("home-decoration"));
        assert_eq!(card.name, "Home Decoration");
        assert_eq!(
            card.image,
            "https://dummyjson.com/image/300x200/d9f99d/000000?text=Home%20Decoration"
        );
        assert_eq!(card.url, "/ui/ex4/home-decoration");
    }
}
