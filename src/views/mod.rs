//! HTML pages rendered with Tera from embedded templates.
//!
//! Server-rendered pages take a settled [`PageState`]; client-rendered
//! pages are shells in the `loading` state whose inline script performs
//! the single fetch and transition in the browser.

mod category;
mod product;
mod state;
mod templates;

pub use category::*;
pub use product::*;
pub use state::*;

use crate::models::{display_name, Category, Listing, Product};
use anyhow::{Context, Result};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const NAV: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Ex1 (Direct API)", "/ui/ex1"),
    ("Ex2 (Route Handler)", "/ui/ex2"),
    ("Ex3 (SSR)", "/ui/ex3"),
    ("Ex4 (SSG)", "/ui/ex4"),
];

/// Navigation with the entry for `path` highlighted. Nested routes keep
/// their section active.
pub fn nav_items(path: &str) -> Vec<NavItem> {
    NAV.iter()
        .map(|&(name, href)| NavItem {
            name,
            href,
            active: if href == "/" {
                path == "/"
            } else {
                path == href || path.starts_with(&format!("{}/", href))
            },
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct Pattern {
    name: &'static str,
    href: &'static str,
    color: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const PATTERNS: [Pattern; 4] = [
    Pattern {
        name: "Example 1: Direct API Call",
        href: "/ui/ex1",
        color: "blue-500",
        summary: "The browser fetches products straight from the upstream catalog.",
        points: &[
            "Client-side rendering",
            "Upstream called from the browser",
            "Loading and error states",
        ],
    },
    Pattern {
        name: "Example 2: Route Handler",
        href: "/ui/ex2",
        color: "green-500",
        summary: "The browser calls this server, which proxies the catalog.",
        points: &[
            "Client-side rendering",
            "Server-side proxy with edge caching",
            "Product detail pages",
        ],
    },
    Pattern {
        name: "Example 3: Server-Side Rendering",
        href: "/ui/ex3",
        color: "purple-500",
        summary: "Categories are fetched and rendered on the server.",
        points: &[
            "Server-side rendering",
            "Data fetched from this server's API",
            "Complete HTML on first response",
        ],
    },
    Pattern {
        name: "Example 4: Static Site Generation",
        href: "/ui/ex4",
        color: "orange-500",
        summary: "Category pages are pre-generated and revalidated on a schedule.",
        points: &[
            "Pre-rendered category pages",
            "Periodic revalidation",
            "Product detail pages with reviews",
        ],
    },
];

#[derive(Debug, Serialize)]
struct ClientShell {
    source: String,
    view: &'static str,
    link_prefix: &'static str,
    error_title: &'static str,
    loading_message: &'static str,
    heading: Option<&'static str>,
    subheading: &'static str,
    background: &'static str,
    banner_color: &'static str,
    banner_title: &'static str,
    banner_subtitle: &'static str,
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a renderer with the embedded templates registered.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", templates::BASE),
            ("macros.html", templates::MACROS),
            ("client_script.html", templates::CLIENT_SCRIPT),
            ("client_shell.html", templates::CLIENT_SHELL),
            ("home.html", templates::HOME),
            ("server_categories.html", templates::SERVER_CATEGORIES),
            ("category_index.html", templates::CATEGORY_INDEX),
            ("category_products.html", templates::CATEGORY_PRODUCTS),
            ("category_product.html", templates::CATEGORY_PRODUCT),
        ])
        .context("Failed to add page templates")?;

        Ok(Self { tera })
    }

    fn context(path: &str, title: &str) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert("nav", &nav_items(path));
        context.insert("title", title);
        context
    }

    fn render(&self, template: &str, context: &TeraContext) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("Failed to render {}", template))
    }

    fn render_shell(&self, path: &str, title: &str, shell: &ClientShell) -> Result<String> {
        let mut context = Self::context(path, title);
        context.insert("shell", shell);
        context.insert("page", &PageState::<()>::Loading);
        self.render("client_shell.html", &context)
    }

    pub fn home(&self) -> Result<String> {
        let mut context = Self::context("/", "Home");
        context.insert("patterns", &PATTERNS);
        self.render("home.html", &context)
    }

    /// `/ui/ex1`: the browser calls `source` (the upstream listing) itself.
    pub fn direct_fetch(&self, source: &str) -> Result<String> {
        let shell = ClientShell {
            source: source.to_string(),
            view: "listing",
            link_prefix: "",
            error_title: "Error loading products",
            loading_message: "Loading products...",
            heading: Some("Products from DummyJSON API"),
            subheading: "Client-side rendered with a direct API call",
            background: "gray-50",
            banner_color: "blue-800",
            banner_title: "Direct API Call",
            banner_subtitle: "This page fetches data directly from the external API in the browser",
        };
        self.render_shell("/ui/ex1", "Ex1 (Direct API)", &shell)
    }

    /// `/ui/ex2`: the browser calls this server's proxy.
    pub fn proxy_listing(&self) -> Result<String> {
        let shell = ClientShell {
            source: "/api/ex2".to_string(),
            view: "listing",
            link_prefix: "/ui/ex2/",
            error_title: "Error loading products",
            loading_message: "Loading products...",
            heading: Some("Products via Route Handler"),
            subheading: "Client-side rendered through a caching proxy",
            background: "green-50",
            banner_color: "green-800",
            banner_title: "Route Handler",
            banner_subtitle: "This page fetches data from the /api/ex2 route handler",
        };
        self.render_shell("/ui/ex2", "Ex2 (Route Handler)", &shell)
    }

    pub fn proxy_product(&self, id: &str) -> Result<String> {
        let shell = ClientShell {
            source: format!("/api/ex2/{}", urlencoding::encode(id)),
            view: "detail",
            link_prefix: "",
            error_title: "Error Loading Product",
            loading_message: "Loading product details...",
            heading: None,
            subheading: "",
            background: "gray-50",
            banner_color: "purple-800",
            banner_title: "Route Handler Pattern",
            banner_subtitle: "Product data fetched through the /api/ex2 route handler",
        };
        self.render_shell("/ui/ex2", "Product Details", &shell)
    }

    /// `/ui/ex3`: categories fetched on the server.
    pub fn server_categories(&self, state: &PageState<Vec<Category>>) -> Result<String> {
        self.render_categories("/ui/ex3", "Ex3 (SSR)", "server_categories.html", state)
    }

    /// `/ui/ex4` and its pre-rendered copy.
    pub fn category_index(&self, state: &PageState<Vec<Category>>) -> Result<String> {
        self.render_categories("/ui/ex4", "Ex4 (SSG)", "category_index.html", state)
    }

    fn render_categories(
        &self,
        path: &str,
        title: &str,
        template: &str,
        state: &PageState<Vec<Category>>,
    ) -> Result<String> {
        let page = state.clone().map(|categories| cards(&categories));
        let count = page.loaded().map_or(0, Vec::len);

        let mut context = Self::context(path, title);
        context.insert("page", &page);
        context.insert("count", &count);
        self.render(template, &context)
    }

    /// `/ui/ex4/{category}`.
    pub fn category_products(&self, category: &str, state: &PageState<Listing>) -> Result<String> {
        let total = state.loaded().map_or(0, |listing| listing.total);
        let page = state.clone().map(|listing| {
            listing
                .products
                .iter()
                .map(|product| ProductCard::new(product, category))
                .collect::<Vec<_>>()
        });
        let count = page.loaded().map_or(0, Vec::len);
        let category_name = display_name(category);

        let mut context = Self::context("/ui/ex4", &category_name);
        context.insert("category_name", &category_name);
        context.insert("page", &page);
        context.insert("count", &count);
        context.insert("total", &total);
        self.render("category_products.html", &context)
    }

    /// `/ui/ex4/{category}/{id}`. Anything but a loaded product renders the
    /// not-found panel.
    pub fn category_product(&self, category: &str, state: &PageState<Product>) -> Result<String> {
        let page = state
            .clone()
            .map(|product| ProductDetail::new(&product, category));
        let title = page
            .loaded()
            .map_or_else(|| "Product Not Found".to_string(), |detail| detail.title.clone());

        let mut context = Self::context("/ui/ex4", &title);
        context.insert("page", &page);
        self.render("category_product.html", &context)
    }
}
