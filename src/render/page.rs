use crate::{
    types::{Artist, PlayHistory, Playlist, TimeRange, Track},
    utils::{self, escape_html},
};

use super::{ImageRef, Template, document};

const STYLE: &str = include_str!("../../static/cards.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Track,
    Artist,
    Playlist,
}

impl CardKind {
    fn class(&self) -> &'static str {
        match self {
            CardKind::Track => "card track-card",
            CardKind::Artist => "card artist-card",
            CardKind::Playlist => "card playlist-card",
        }
    }
}

/// A labelled line on a card, e.g. `Artist: Daft Punk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

impl Detail {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// One rendered block per source item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub details: Vec<Detail>,
    pub note: Option<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub cards: Vec<Card>,
}

/// A titled page made of card grids with a link back to the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPage {
    pub title: String,
    pub heading: String,
    pub sections: Vec<Section>,
    pub back_link: String,
}

impl Card {
    pub fn render(&self) -> String {
        let mut html = format!(
            "      <div class=\"{class}\">\n        <h3>{title}</h3>\n",
            class = self.kind.class(),
            title = escape_html(&self.title)
        );
        for detail in &self.details {
            html.push_str(&format!(
                "        <p><strong>{label}:</strong> {value}</p>\n",
                label = escape_html(&detail.label),
                value = escape_html(&detail.value)
            ));
        }
        if let Some(note) = &self.note {
            html.push_str(&format!(
                "        <p><small>{}</small></p>\n",
                escape_html(note)
            ));
        }
        html.push_str(&format!("        {}\n      </div>\n", self.image.render()));
        html
    }
}

impl Template for CollectionPage {
    fn render(&self) -> String {
        let mut body = format!("    <h1>{}</h1>\n", escape_html(&self.heading));
        for section in &self.sections {
            if let Some(heading) = &section.heading {
                body.push_str(&format!("    <h2>{}</h2>\n", escape_html(heading)));
            }
            body.push_str("    <div class=\"container\">\n");
            for card in &section.cards {
                body.push_str(&card.render());
            }
            body.push_str("    </div>\n");
        }
        body.push_str("    <div style=\"text-align: center;\">\n");
        body.push_str(&format!(
            "      <a class=\"home-link\" href=\"{}\">Back to Profile</a>\n",
            escape_html(&self.back_link)
        ));
        body.push_str("    </div>");

        document(&self.title, STYLE, &body)
    }
}

fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&Track> for Card {
    fn from(track: &Track) -> Self {
        Card {
            kind: CardKind::Track,
            title: track.name.clone(),
            details: vec![
                Detail::new("Artist", artist_names(track)),
                Detail::new("Album", track.album.name.clone()),
            ],
            note: None,
            image: ImageRef::first_or_placeholder(&track.album.images, "Album Cover", "No Cover"),
        }
    }
}

impl From<&Artist> for Card {
    fn from(artist: &Artist) -> Self {
        Card {
            kind: CardKind::Artist,
            title: artist.name.clone(),
            details: Vec::new(),
            note: None,
            image: ImageRef::first_or_placeholder(
                &artist.images,
                &format!("{} Picture", artist.name),
                "No Picture",
            ),
        }
    }
}

impl From<&Playlist> for Card {
    fn from(playlist: &Playlist) -> Self {
        Card {
            kind: CardKind::Playlist,
            title: playlist.name.clone(),
            details: vec![Detail::new("Tracks", playlist.tracks.total.to_string())],
            note: None,
            image: ImageRef::first_or_placeholder(&playlist.images, "Playlist Cover", "No Cover"),
        }
    }
}

impl From<&PlayHistory> for Card {
    fn from(entry: &PlayHistory) -> Self {
        let mut card = Card::from(&entry.track);
        card.note = Some(format!(
            "Played at: {}",
            utils::format_played_at(&entry.played_at)
        ));
        card
    }
}

impl CollectionPage {
    pub fn playlists(playlists: &[Playlist]) -> Self {
        CollectionPage {
            title: "Your Spotify Playlists".to_string(),
            heading: "Your Playlists".to_string(),
            sections: vec![Section {
                heading: None,
                cards: playlists.iter().map(Card::from).collect(),
            }],
            back_link: "/profile".to_string(),
        }
    }

    pub fn wrapped(range: TimeRange, tracks: &[Track], artists: &[Artist]) -> Self {
        CollectionPage {
            title: range.title().to_string(),
            heading: range.title().to_string(),
            sections: vec![
                Section {
                    heading: Some(format!("Your Top Songs{}", range.period())),
                    cards: tracks.iter().map(Card::from).collect(),
                },
                Section {
                    heading: Some(format!("Your Top Artists{}", range.period())),
                    cards: artists.iter().map(Card::from).collect(),
                },
            ],
            back_link: "/profile".to_string(),
        }
    }

    pub fn recently_played(history: &[PlayHistory]) -> Self {
        CollectionPage {
            title: "Recently played Songs".to_string(),
            heading: "Recently played Songs".to_string(),
            sections: vec![Section {
                heading: None,
                cards: history.iter().map(Card::from).collect(),
            }],
            back_link: "/profile".to_string(),
        }
    }
}
