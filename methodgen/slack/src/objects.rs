//! Slack objects used as arguments and payloads of the generated calls.
//!
//! Every object tolerates missing fields, since Slack omits most of them
//! depending on the endpoint and the token's scopes.

use serde::{Deserialize, Serialize};

/// A field rendered in a table inside an [`Attachment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// A legacy message attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fallback: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub pretext: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_link: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

impl Attachment {
    /// Creates an attachment with only `text` set.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: Option<String>,
    pub channel: Option<String>,
    pub user: Option<String>,
    pub bot_id: Option<String>,
    pub username: Option<String>,
    pub text: String,
    pub ts: String,
    pub thread_ts: Option<String>,
    pub attachments: Vec<Attachment>,
}

/// Topic or purpose of a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelTopic {
    pub value: String,
    pub creator: String,
    pub last_set: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub created: i64,
    pub creator: String,
    pub is_channel: bool,
    pub is_im: bool,
    pub is_archived: bool,
    pub is_general: bool,
    pub is_member: bool,
    pub user: Option<String>,
    pub members: Vec<String>,
    pub topic: Option<ChannelTopic>,
    pub purpose: Option<ChannelTopic>,
    pub num_members: Option<i64>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub real_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_text: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_emoji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub real_name: String,
    pub deleted: bool,
    pub is_admin: bool,
    pub is_bot: bool,
    pub tz: Option<String>,
    pub profile: UserProfile,
    pub presence: Option<String>,
    pub locale: Option<String>,
}

/// One input of a [`Dialog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialog {
    pub callback_id: String,
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub submit_label: String,

    pub elements: Vec<DialogElement>,
}

/// Identity of the token, as reported by `auth.test`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthTestResponse {
    pub url: String,
    pub team: String,
    pub user: String,
    pub team_id: String,
    pub user_id: String,
    pub bot_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsHistoryResponse {
    pub latest: Option<String>,
    pub messages: Vec<Message>,
    pub has_more: bool,
    pub unread_count_display: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthAccessResponse {
    pub access_token: String,
    pub scope: String,
    pub team_name: Option<String>,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
}
