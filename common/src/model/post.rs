use serde::{Deserialize, Deserializer, Serialize};

use super::record::{Listable, Record, RecordId, require_text};
use crate::error::CatalogError;

/// A post of the soft-delete variant. Posts are listed by title and view count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "views_from_number_or_text")]
    pub views: u64,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

impl Record for Post {
    type Draft = PostDraft;
    type Patch = PostPatch;

    const COLLECTION: &'static str = "posts";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn make_id(seq: u64) -> RecordId {
        RecordId::Text(seq.to_string())
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn validate(draft: &PostDraft) -> Result<(), CatalogError> {
        require_text("title", &draft.title, "Please enter a post title")
    }

    fn from_draft(id: RecordId, draft: &PostDraft) -> Self {
        Post {
            id,
            title: draft.title.trim().to_string(),
            views: draft.views,
            is_deleted: false,
        }
    }

    fn patch_from_draft(draft: &PostDraft) -> PostPatch {
        PostPatch {
            title: Some(draft.title.trim().to_string()),
            views: Some(draft.views),
            is_deleted: None,
        }
    }

    fn deletion_patch(deleted: bool) -> PostPatch {
        PostPatch {
            is_deleted: Some(deleted),
            ..PostPatch::default()
        }
    }

    fn apply(&mut self, patch: &PostPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(views) = patch.views {
            self.views = views;
        }
        if let Some(deleted) = patch.is_deleted {
            self.is_deleted = deleted;
        }
    }
}

impl Listable for Post {
    fn name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        ""
    }

    fn magnitude(&self) -> f64 {
        self.views as f64
    }
}

/// Accepts `12`, `12.0`, `"12"` and `null`. Anything else counts as 0 views.
fn views_from_number_or_text<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawViews {
        Count(u64),
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawViews>::deserialize(deserializer)? {
        Some(RawViews::Count(n)) => n,
        Some(RawViews::Number(n)) if n.is_finite() && n >= 0.0 => n as u64,
        Some(RawViews::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids_are_text() {
        assert_eq!(Post::make_id(5), RecordId::Text("5".into()));
    }

    #[test]
    fn missing_views_default_to_zero() {
        let post: Post = serde_json::from_str(r#"{"id": "1", "title": "Hello"}"#).unwrap();
        assert_eq!(post.views, 0);
        assert!(!post.is_deleted);
    }

    #[test]
    fn edit_patch_leaves_deletion_flag_alone() {
        let patch = Post::patch_from_draft(&PostDraft {
            title: "  New  ".into(),
            views: 3,
        });
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"title":"New","views":3}"#);
    }

    #[test]
    fn views_are_read_leniently() {
        let views = |raw: &str| {
            let json = format!(r#"{{"id": "1", "title": "Hello", "views": {}}}"#, raw);
            serde_json::from_str::<Post>(&json).unwrap().views
        };
        assert_eq!(views("7"), 7);
        assert_eq!(views(r#""12""#), 12);
        assert_eq!(views(" null"), 0);
        assert_eq!(views(r#""abc""#), 0);
        assert_eq!(views("3.0"), 3);
        assert_eq!(views("-4"), 0);
        assert_eq!(views("[1]"), 0);
    }
}
