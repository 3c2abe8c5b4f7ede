//! # Render Module
//!
//! Turns typed view-models into HTML. Handlers build a [`ProfileView`] or a
//! [`CollectionPage`] from API data and call [`Template::render`]; nothing
//! outside this module concatenates markup.
//!
//! Every piece of text taken from the API is escaped before it is placed in
//! the page. Items without artwork fall back to [`PLACEHOLDER_IMAGE_URL`].

mod page;
mod profile;

pub use page::{Card, CardKind, CollectionPage, Detail, Section};
pub use profile::{NavLink, ProfileView};

use crate::types::Image;

/// Image shown when an item carries no artwork.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150?text=No+Picture";

/// The embedded landing page served at `/`.
pub const LANDING_PAGE: &str = include_str!("../../static/index.html");

pub trait Template {
    fn render(&self) -> String;
}

/// An `<img>` to be rendered, already resolved to a concrete source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    /// Picks the first (largest) image, or the placeholder if there is none.
    pub fn first_or_placeholder(images: &[Image], alt: &str, missing_alt: &str) -> Self {
        match images.first() {
            Some(image) => ImageRef {
                src: image.url.clone(),
                alt: alt.to_string(),
            },
            None => ImageRef {
                src: PLACEHOLDER_IMAGE_URL.to_string(),
                alt: missing_alt.to_string(),
            },
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<img src="{src}" alt="{alt}" />"#,
            src = crate::utils::escape_html(&self.src),
            alt = crate::utils::escape_html(&self.alt)
        )
    }
}

fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <style>
{style}
    </style>
  </head>
  <body>
{body}
  </body>
</html>
"#,
        title = crate::utils::escape_html(title),
        style = style,
        body = body
    )
}
