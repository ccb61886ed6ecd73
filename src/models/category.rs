use serde::{Deserialize, Serialize};

/// A category as shown on index pages: the upstream slug plus derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub url: String,
}

impl Category {
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: display_name(&slug),
            url: format!("/ui/ex4/{}", slug),
            slug,
        }
    }
}

/// Turns a slug into a heading: `home-decoration` -> `Home Decoration`.
///
/// Splits on `-`, uppercases the first character of every segment and joins
/// the segments with a single space. Applying it to its own output is a no-op.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
