use serde::{Deserialize, Serialize};

/// One of the four fixed content slots on the carousel ring, in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Live,
    LatestVideo,
    Shows,
    Genres,
}

impl Face {
    pub const ALL: [Face; 4] = [Face::Live, Face::LatestVideo, Face::Shows, Face::Genres];

    pub fn index(self) -> usize {
        match self {
            Face::Live => 0,
            Face::LatestVideo => 1,
            Face::Shows => 2,
            Face::Genres => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Face> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Face::Live => "Live Channel",
            Face::LatestVideo => "Latest Music Video",
            Face::Shows => "Shows",
            Face::Genres => "Genres",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Face::Live => "/api/live-channels",
            Face::LatestVideo => "/api/videos",
            Face::Shows => "/api/shows",
            Face::Genres => "/api/genres",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Face::Live => "No live channels yet.",
            Face::LatestVideo => "No videos yet.",
            Face::Shows => "No shows yet.",
            Face::Genres => "No genres yet.",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
