//! Generic "fetch a list, show its first item or an empty state" panel.

use serde::de::DeserializeOwned;
use shared::{
    domain::Face,
    protocol::{Genre, LiveChannel, Show, Video},
};

use crate::AvangClient;

/// What a panel shows right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelView<'a, T> {
    Item(&'a T),
    Empty(&'static str),
}

#[derive(Debug, Clone)]
pub struct ContentPanel<T> {
    face: Face,
    items: Vec<T>,
    loaded: bool,
}

impl<T> ContentPanel<T> {
    pub fn new(face: Face) -> Self {
        Self {
            face,
            items: Vec::new(),
            loaded: false,
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn endpoint(&self) -> &'static str {
        self.face.endpoint()
    }

    pub fn title(&self) -> &'static str {
        self.face.title()
    }

    pub fn empty_message(&self) -> &'static str {
        self.face.empty_message()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Replaces the panel contents with a finished fetch result.
    pub fn apply(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
    }

    pub fn view(&self) -> PanelView<'_, T> {
        match self.items.first() {
            Some(item) => PanelView::Item(item),
            None => PanelView::Empty(self.empty_message()),
        }
    }

    pub fn render<R>(
        &self,
        render_item: impl FnOnce(&T) -> R,
        render_empty: impl FnOnce(&'static str) -> R,
    ) -> R {
        match self.view() {
            PanelView::Item(item) => render_item(item),
            PanelView::Empty(message) => render_empty(message),
        }
    }
}

impl<T: DeserializeOwned> ContentPanel<T> {
    pub async fn load(&mut self, client: &AvangClient) {
        let items = client.load_items(self.endpoint()).await;
        self.apply(items);
    }
}

/// Fetched items tagged by the face they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceContent {
    Live(Vec<LiveChannel>),
    LatestVideo(Vec<Video>),
    Shows(Vec<Show>),
    Genres(Vec<Genre>),
}

impl FaceContent {
    pub fn face(&self) -> Face {
        match self {
            FaceContent::Live(_) => Face::Live,
            FaceContent::LatestVideo(_) => Face::LatestVideo,
            FaceContent::Shows(_) => Face::Shows,
            FaceContent::Genres(_) => Face::Genres,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FaceContent::Live(items) => items.len(),
            FaceContent::LatestVideo(items) => items.len(),
            FaceContent::Shows(items) => items.len(),
            FaceContent::Genres(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The four panels shown on the ring, each holding its own isolated state.
#[derive(Debug, Clone)]
pub struct Panels {
    pub live: ContentPanel<LiveChannel>,
    pub latest_video: ContentPanel<Video>,
    pub shows: ContentPanel<Show>,
    pub genres: ContentPanel<Genre>,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            live: ContentPanel::new(Face::Live),
            latest_video: ContentPanel::new(Face::LatestVideo),
            shows: ContentPanel::new(Face::Shows),
            genres: ContentPanel::new(Face::Genres),
        }
    }
}

impl Panels {
    pub fn apply(&mut self, content: FaceContent) {
        match content {
            FaceContent::Live(items) => self.live.apply(items),
            FaceContent::LatestVideo(items) => self.latest_video.apply(items),
            FaceContent::Shows(items) => self.shows.apply(items),
            FaceContent::Genres(items) => self.genres.apply(items),
        }
    }

    pub fn is_loaded(&self, face: Face) -> bool {
        match face {
            Face::Live => self.live.is_loaded(),
            Face::LatestVideo => self.latest_video.is_loaded(),
            Face::Shows => self.shows.is_loaded(),
            Face::Genres => self.genres.is_loaded(),
        }
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
