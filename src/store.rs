//! Global Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Comment, Photo};

/// Gallery state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// All photos, in slide order
    pub photos: Vec<Photo>,
    /// Comments of the current photo
    pub comments: Vec<Comment>,
    /// Set once `/photos` has answered
    pub loaded: bool,
}

fn set_likes(photos: &mut [Photo], index: usize, total: u32) -> bool {
    photos.get_mut(index).map(|photo| photo.likes = total).is_some()
}

fn set_favorites(photos: &mut [Photo], index: usize, total: u32) -> bool {
    photos.get_mut(index).map(|photo| photo.favorites = total).is_some()
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the photo list and mark the gallery loaded
pub fn store_set_photos(store: &GalleryStore, photos: Vec<Photo>) {
    *store.photos().write() = photos;
    *store.loaded().write() = true;
}

/// Replace the comment list
pub fn store_set_comments(store: &GalleryStore, comments: Vec<Comment>) {
    *store.comments().write() = comments;
}

/// Overwrite a photo's like count with the server total
pub fn store_set_likes(store: &GalleryStore, index: usize, total: u32) {
    set_likes(&mut store.photos().write(), index, total);
}

/// Overwrite a photo's favorite count with the server total
pub fn store_set_favorites(store: &GalleryStore, index: usize, total: u32) {
    set_favorites(&mut store.photos().write(), index, total);
}

/// Append a newly posted comment
pub fn store_push_comment(store: &GalleryStore, comment: Comment) {
    store.comments().write().push(comment);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_photo(id: u32, likes: u32, favorites: u32) -> Photo {
        Photo {
            id,
            title: format!("Photo {}", id),
            caption: String::new(),
            src: format!("/images/{}.jpg", id),
            likes,
            favorites,
            created_at: None,
        }
    }

    fn make_comment(id: u32, body: &str) -> Comment {
        Comment {
            id: Some(id),
            photo_id: 1,
            name: "Ann".to_string(),
            body: body.to_string(),
            date: None,
        }
    }

    fn make_state() -> GalleryState {
        GalleryState {
            photos: vec![make_photo(1, 5, 1), make_photo(2, 0, 0), make_photo(3, 9, 4)],
            comments: Vec::new(),
            loaded: true,
        }
    }

    #[test]
    fn test_like_total_replaces_count() {
        let mut state = make_state();
        assert!(set_likes(&mut state.photos, 1, 17));
        assert_eq!(state.photos[1].likes, 17);
        // Others untouched
        assert_eq!(state.photos[0].likes, 5);
        assert_eq!(state.photos[1].favorites, 0);
    }

    #[test]
    fn test_favorite_total_replaces_count() {
        let mut state = make_state();
        // Server total wins even when lower than the local count
        assert!(set_favorites(&mut state.photos, 2, 3));
        assert_eq!(state.photos[2].favorites, 3);
        assert_eq!(state.photos[2].likes, 9);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut state = make_state();
        assert!(!set_likes(&mut state.photos, 3, 1));
        assert!(!set_favorites(&mut state.photos, 10, 1));
        assert_eq!(state.photos.len(), 3);
    }

    #[test]
    fn test_store_helpers() {
        let store = Store::new(GalleryState::default());
        store_set_photos(&store, make_state().photos);
        assert!(store.loaded().get_untracked());

        store_set_likes(&store, 0, 6);
        store_set_favorites(&store, 0, 2);
        let first = store.photos().get_untracked()[0].clone();
        assert_eq!((first.likes, first.favorites), (6, 2));

        store_set_comments(&store, vec![make_comment(1, "First")]);
        store_push_comment(&store, make_comment(2, "Second"));
        let bodies: Vec<String> = store.comments().get_untracked().into_iter().map(|c| c.body).collect();
        assert_eq!(bodies, vec!["First", "Second"]);
    }
}
