//! Response shapes the remote API uses for collections and single records.

use serde::Deserialize;

/// A collection response: either a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<E> {
    Bare(Vec<E>),
    Wrapped {
        #[serde(alias = "blogs", alias = "data")]
        items: Vec<E>,
    },
}

impl<E> ListEnvelope<E> {
    pub fn into_items(self) -> Vec<E> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { items } => items,
        }
    }
}

/// A single-record response: the record itself or an object wrapping it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<E> {
    Wrapped {
        #[serde(alias = "blog", alias = "data")]
        item: E,
    },
    Bare(E),
}

impl<E> ItemEnvelope<E> {
    pub fn into_item(self) -> E {
        match self {
            ItemEnvelope::Wrapped { item } => item,
            ItemEnvelope::Bare(item) => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GalleryItem, Post};

    #[test]
    fn test_list_shapes() {
        let bare: ListEnvelope<GalleryItem> =
            serde_json::from_str(r#"[{"_id":"g1","category":"face"}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let wrapped: ListEnvelope<Post> =
            serde_json::from_str(r#"{"blogs":[{"_id":"p1"},{"_id":"p2"}],"total":2}"#).unwrap();
        assert_eq!(wrapped.into_items().len(), 2);

        let items: ListEnvelope<Post> =
            serde_json::from_str(r#"{"items":[{"_id":"p1"}]}"#).unwrap();
        assert_eq!(items.into_items()[0].id, "p1");
    }

    #[test]
    fn test_list_rejects_unknown_shape() {
        assert!(serde_json::from_str::<ListEnvelope<Post>>(r#"{"posts":[]}"#).is_err());
    }

    #[test]
    fn test_item_shapes() {
        let bare: ItemEnvelope<Post> =
            serde_json::from_str(r#"{"_id":"p1","title":"Hi"}"#).unwrap();
        assert_eq!(bare.into_item().title.as_deref(), Some("Hi"));

        let wrapped: ItemEnvelope<Post> =
            serde_json::from_str(r#"{"blog":{"_id":"p2"}}"#).unwrap();
        assert_eq!(wrapped.into_item().id, "p2");
    }
}
