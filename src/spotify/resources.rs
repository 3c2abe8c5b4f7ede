use serde::de::DeserializeOwned;

use crate::{
    errors::FetchError,
    types::{Artist, Paging, PlayHistory, Playlist, TimeRange, Track, UserProfile},
};

use super::SpotifyClient;

/// Number of items shown on each Wrapped section.
pub const TOP_ITEMS_LIMIT: u32 = 10;

/// Number of entries on the recently played page (the API maximum).
pub const RECENTLY_PLAYED_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Issues one authenticated GET against the Web API and decodes the body.
    async fn get<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, FetchError> {
        let url = format!("{api}{path}", api = self.api_url, path = path);
        let res = self.http.get(&url).bearer_auth(token).send().await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::Upstream { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /me`
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, FetchError> {
        self.get(token, "/me").await
    }

    /// `GET /me/playlists`, first page only.
    pub async fn my_playlists(&self, token: &str) -> Result<Vec<Playlist>, FetchError> {
        let page: Paging<Playlist> = self.get(token, "/me/playlists").await?;
        Ok(page.items)
    }

    /// `GET /me/top/tracks` for the given window.
    pub async fn top_tracks(
        &self,
        token: &str,
        range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Track>, FetchError> {
        let path = format!(
            "/me/top/tracks?time_range={range}&limit={limit}",
            range = range.as_str(),
            limit = limit
        );
        let page: Paging<Track> = self.get(token, &path).await?;
        Ok(page.items)
    }

    /// `GET /me/top/artists` for the given window.
    pub async fn top_artists(
        &self,
        token: &str,
        range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Artist>, FetchError> {
        let path = format!(
            "/me/top/artists?time_range={range}&limit={limit}",
            range = range.as_str(),
            limit = limit
        );
        let page: Paging<Artist> = self.get(token, &path).await?;
        Ok(page.items)
    }

    /// `GET /me/player/recently-played`
    pub async fn recently_played(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<PlayHistory>, FetchError> {
        let path = format!("/me/player/recently-played?limit={limit}", limit = limit);
        let page: Paging<PlayHistory> = self.get(token, &path).await?;
        Ok(page.items)
    }
}
