//! Simulated team chat shown in the product mock
//!
//! Every channel owns its own append-only message log. Nothing is persisted;
//! a reload starts again from the canned seed.

use serde::{Deserialize, Serialize};

use super::tabs::{SelectionPolicy, TabSwitcher, Variant};

/// What a message is, dispatched on by the renderer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageKind {
    /// A teammate's message
    Member { author: String },
    /// Calendar bot announcing an event
    Calendar { title: String, starts_at: String },
    /// A huddle (voice call) in progress
    Huddle { participants: u32 },
    /// Reply from the AI agent
    Ai,
    /// Typed by the visitor in the demo input
    Own,
}

impl MessageKind {
    pub fn member(author: impl Into<String>) -> Self {
        MessageKind::Member {
            author: author.into(),
        }
    }

    /// Name shown above the message
    pub fn author(&self) -> &str {
        match self {
            MessageKind::Member { author } => author,
            MessageKind::Calendar { .. } => "Calendar",
            MessageKind::Huddle { .. } => "Huddle",
            MessageKind::Ai => "Sync AI",
            MessageKind::Own => "You",
        }
    }

    pub fn is_own(&self) -> bool {
        matches!(self, MessageKind::Own)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique and increasing within the owning channel
    pub id: u64,
    #[serde(flatten)]
    pub kind: MessageKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub key: String,
    pub name: String,
    messages: Vec<ChatMessage>,
}

impl Channel {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a canned entry while building the seed
    pub fn with_message(
        mut self,
        kind: MessageKind,
        text: impl Into<String>,
        timestamp: Option<&str>,
    ) -> Self {
        self.push(kind, text.into(), timestamp.map(str::to_string));
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn next_id(&self) -> u64 {
        // Ids only ever grow, so the last entry holds the maximum
        self.messages.last().map_or(1, |message| message.id + 1)
    }

    fn push(&mut self, kind: MessageKind, text: String, timestamp: Option<String>) -> u64 {
        let id = self.next_id();
        self.messages.push(ChatMessage {
            id,
            kind,
            text,
            timestamp,
        });
        id
    }
}

impl Variant for Channel {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Channel list with one active channel, selected by click only
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSimulator {
    channels: TabSwitcher<Channel>,
}

impl ChatSimulator {
    /// The first channel starts active
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels: TabSwitcher::new(channels, SelectionPolicy::Manual),
        }
    }

    pub fn channels(&self) -> &[Channel] {
        self.channels.variants()
    }

    /// Selection state of the channel list
    pub fn selection(&self) -> &TabSwitcher<Channel> {
        &self.channels
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.channels.active()
    }

    pub fn active_index(&self) -> usize {
        self.channels.active_index()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.channels.active_key()
    }

    /// Messages of the active channel
    pub fn messages(&self) -> &[ChatMessage] {
        self.active_channel().map(Channel::messages).unwrap_or_default()
    }

    pub fn channel(&self, key: &str) -> Option<&Channel> {
        self.channels().iter().find(|channel| channel.key == key)
    }

    /// Make `key` the rendered channel. Unknown keys are ignored.
    pub fn switch_channel(&mut self, key: &str) -> bool {
        let switched = self.channels.select_key(key);
        if switched {
            tracing::debug!(channel = key, "switched chat channel");
        }
        switched
    }

    /// Post the visitor's text to the active channel. Blank input is
    /// rejected without touching any state.
    pub fn append_message(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let channel = self.channels.active_mut()?;
        let id = channel.push(MessageKind::Own, text.to_string(), None);
        tracing::debug!(channel = %channel.key, id, "appended demo message");
        channel.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tabs::SelectionSource;

    fn simulator() -> ChatSimulator {
        ChatSimulator::new(vec![
            Channel::new("general", "general").with_message(
                MessageKind::member("Sarah"),
                "Morning all",
                Some("9:01 AM"),
            ),
            Channel::new("random", "random")
                .with_message(MessageKind::Huddle { participants: 3 }, "Huddle started", None)
                .with_message(MessageKind::Ai, "Here is a summary", None),
        ])
    }

    #[test]
    fn test_seed_ids_increase_per_channel() {
        let chat = simulator();
        let random = chat.channel("random").expect("seeded");
        let ids: Vec<u64> = random.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(chat.channel("general").map(Channel::len), Some(1));
    }

    #[test]
    fn test_append_assigns_next_id_and_own_kind() {
        let mut chat = simulator();
        let message = chat.append_message("  hello  ").cloned().expect("appended");
        assert_eq!(message.id, 2);
        assert_eq!(message.kind, MessageKind::Own);
        assert_eq!(message.text, "hello");
        assert!(message.timestamp.is_none());
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut chat = simulator();
        assert!(chat.append_message("").is_none());
        assert!(chat.append_message("   \n\t").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_histories_do_not_leak_across_channels() {
        let mut chat = simulator();
        for text in ["one", "two", "three"] {
            chat.append_message(text);
        }
        assert!(chat.switch_channel("random"));
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.switch_channel("general"));

        let texts: Vec<&str> = chat.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Morning all", "one", "two", "three"]);
    }

    #[test]
    fn test_switch_to_unknown_or_same_channel() {
        let mut chat = simulator();
        assert!(!chat.switch_channel("general"));
        assert!(!chat.switch_channel("nope"));
        assert_eq!(chat.active_key(), Some("general"));
    }

    #[test]
    fn test_channel_list_is_a_manual_switcher() {
        let mut chat = simulator();
        assert_eq!(chat.selection().policy(), SelectionPolicy::Manual);
        assert_eq!(chat.selection().source(), SelectionSource::Initial);

        assert!(chat.switch_channel("random"));
        assert_eq!(chat.selection().source(), SelectionSource::Click);
        assert_eq!(chat.active_index(), 1);

        // Posts land in the channel the switcher points at
        let id = chat.append_message("after switch").map(|m| m.id);
        assert_eq!(id, Some(3));
        assert_eq!(chat.channel("general").map(Channel::len), Some(1));
    }

    #[test]
    fn test_empty_simulator_is_inert() {
        let mut chat = ChatSimulator::new(Vec::new());
        assert!(chat.messages().is_empty());
        assert!(chat.append_message("hi").is_none());
    }

    #[test]
    fn test_kind_authors() {
        assert_eq!(MessageKind::member("Maya").author(), "Maya");
        assert_eq!(MessageKind::Ai.author(), "Sync AI");
        assert!(MessageKind::Own.is_own());
        let calendar = MessageKind::Calendar {
            title: "Launch sync".to_string(),
            starts_at: "2:00 PM".to_string(),
        };
        assert_eq!(calendar.author(), "Calendar");
    }

    #[test]
    fn test_message_serializes_with_kind_tag() {
        let message = ChatMessage {
            id: 4,
            kind: MessageKind::Huddle { participants: 2 },
            text: "Join us".to_string(),
            timestamp: None,
        };
        let json = serde_json::to_value(&message).expect("serializable");
        assert_eq!(json["kind"], "huddle");
        assert_eq!(json["participants"], 2);
        assert!(json.get("timestamp").is_none());
    }
}
