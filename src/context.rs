//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_slideshow::{Direction, SlideSignals};

use crate::error::ApiError;
use crate::store::{GalleryStateStoreFields, GalleryStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Slide cursor
    pub slides: SlideSignals,
    /// Id of the photo at the cursor (changes only when the id does)
    pub current_photo_id: Memo<Option<u32>>,
    /// Last failed request - read
    pub error: ReadSignal<Option<String>>,
    /// Last failed request - write
    set_error: WriteSignal<Option<String>>,
    /// Bumped on every reported error, so repeats of one message stay distinct
    pub error_generation: ReadSignal<u32>,
    set_error_generation: WriteSignal<u32>,
}

impl GalleryContext {
    pub fn new(
        store: GalleryStore,
        slides: SlideSignals,
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        let current_photo_id = Memo::new(move |_| {
            let index = slides.index();
            store.photos().with(|photos| photos.get(index).map(|photo| photo.id))
        });
        let (error_generation, set_error_generation) = signal(0u32);
        Self {
            slides,
            current_photo_id,
            error: error.0,
            set_error: error.1,
            error_generation,
            set_error_generation,
        }
    }

    /// Index of the photo on screen
    pub fn current_index(&self) -> usize {
        self.slides.index()
    }

    pub fn advance(&self, direction: Direction) {
        self.slides.advance(direction);
    }

    /// Log a failed request and show it in the banner
    pub fn report(&self, scope: &str, err: &ApiError) {
        web_sys::console::error_1(&format!("[{}] {} (status {})", scope, err, err.status()).into());
        self.raise(err.to_string());
    }

    /// Show a message in the banner; returns its generation
    pub fn raise(&self, message: String) -> u32 {
        self.set_error_generation.update(|g| *g = g.wrapping_add(1));
        self.set_error.set(Some(message));
        self.error_generation.get_untracked()
    }

    /// Clear the banner only if nothing was raised after `generation`
    pub fn dismiss_if_current(&self, generation: u32) -> bool {
        if self.error_generation.get_untracked() != generation {
            return false;
        }
        self.clear_error();
        true
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}

pub fn use_gallery_context() -> GalleryContext {
    expect_context::<GalleryContext>()
}
