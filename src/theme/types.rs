use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Theme configuration supplied by the site, carried through to the output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Blog author shown in the sidebar card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Discussion-backed comment widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentConfig>,

    /// Friend links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friend: Vec<FriendLink>,

    /// Everything else (nav, sidebar, ...) passes through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Comment widget settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentConfig {
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub repo_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the friend-link list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub desc: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
