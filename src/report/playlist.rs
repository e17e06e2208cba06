use crate::database::db_structs::Leaderboard;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

/// A Beat Saber `.bplist` playlist: songs grouped by hash, one entry per
/// included difficulty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub playlist_title: String,
    pub playlist_author: String,
    pub songs: Vec<PlaylistSong>
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSong {
    pub hash: String,
    pub song_name: String,
    pub level_author_name: String,
    pub difficulties: Vec<PlaylistDifficulty>
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDifficulty {
    pub name: String,
    pub characteristic: String
}

impl Playlist {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Builds a playlist from leaderboards, deduplicating repeated leaderboards
/// and collapsing the difficulties of one song into a single entry. Insertion
/// order is preserved so the playlist mirrors the report ordering.
pub fn build_playlist<'a, I>(leaderboards: I, name: &str, author: &str) -> Playlist
where
    I: IntoIterator<Item = &'a Leaderboard>
{
    let mut songs: IndexMap<&str, PlaylistSong> = IndexMap::new();

    for leaderboard in leaderboards
        .into_iter()
        .unique_by(|l| l.leaderboard_id.as_str())
    {
        let Some(difficulty) = &leaderboard.difficulty else {
            continue;
        };

        let entry = PlaylistDifficulty {
            name: difficulty.difficulty.playlist_name().to_string(),
            characteristic: difficulty.mode.characteristic_name().to_string()
        };

        songs
            .entry(difficulty.song.hash.as_str())
            .or_insert_with(|| PlaylistSong {
                hash: difficulty.song.hash.clone(),
                song_name: difficulty.song.name.clone(),
                level_author_name: difficulty.song.mapper.clone(),
                difficulties: Vec::new()
            })
            .difficulties
            .push(entry);
    }

    Playlist {
        playlist_title: name.to_string(),
        playlist_author: author.to_string(),
        songs: songs.into_values().collect()
    }
}
