use crate::{types::UserProfile, utils::escape_html};

use super::{ImageRef, Template, document};

const STYLE: &str = include_str!("../../static/profile.css");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Account summary with links to every other view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub email: String,
    pub country: String,
    pub image: ImageRef,
    pub links: Vec<NavLink>,
}

pub const PROFILE_LINKS: [NavLink; 6] = [
    NavLink {
        href: "/playlists",
        label: "Playlists",
    },
    NavLink {
        href: "/MonthlyWrapped",
        label: "Monthly Wrapped",
    },
    NavLink {
        href: "/6MonthsWrapped",
        label: "6 Months Wrapped",
    },
    NavLink {
        href: "/FullWrapped",
        label: "All time Wrapped",
    },
    NavLink {
        href: "/recently-played",
        label: "Recently played Songs",
    },
    NavLink {
        href: "/logout",
        label: "Logout",
    },
];

impl From<&UserProfile> for ProfileView {
    fn from(user: &UserProfile) -> Self {
        ProfileView {
            display_name: user.display_name.clone().unwrap_or_else(|| user.id.clone()),
            email: user.email.clone().unwrap_or_default(),
            country: user.country.clone().unwrap_or_default(),
            image: ImageRef::first_or_placeholder(
                &user.images,
                "Profile Picture",
                "No Profile Picture",
            ),
            links: PROFILE_LINKS.to_vec(),
        }
    }
}

impl Template for ProfileView {
    fn render(&self) -> String {
        let links = self
            .links
            .iter()
            .map(|link| {
                format!(
                    "        <a class=\"home-link\" href=\"{}\">{}</a><br/>\n",
                    link.href, link.label
                )
            })
            .collect::<String>();

        let body = format!(
            r#"    <div class="profile-card">
      <h1>Hello, {name}!</h1>
      <p><strong>Email:</strong> {email}</p>
      <p><strong>Country:</strong> {country}</p>
      {image}
      <div>
{links}      </div>
    </div>"#,
            name = escape_html(&self.display_name),
            email = escape_html(&self.email),
            country = escape_html(&self.country),
            image = self.image.render(),
            links = links
        );

        document("Spotify Profile", STYLE, &body)
    }
}
