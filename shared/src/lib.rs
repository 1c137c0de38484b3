pub mod about;
pub mod styles;

/// Document-level metadata a page declares for the `<head>` of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
}

/// A paragraph that ends in a single outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub caption: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}
