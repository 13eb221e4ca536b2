//! Messaging inbox state.
//!
//! DESIGN
//! ======
//! Conversations and messages are local to the page; sending appends a
//! message with status `Sent` and nothing leaves the browser. Message ages are
//! kept in minutes relative to when the inbox was opened, so rendering needs
//! no wall clock.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use uuid::Uuid;

use crate::net::types::{Role, User};
use crate::util::text::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn css_class(self) -> &'static str {
        match self {
            Presence::Online => "presence presence--online",
            Presence::Away => "presence presence--away",
            Presence::Offline => "presence presence--offline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub presence: Presence,
}

impl Contact {
    fn new(id: &str, name: &str, role: Role, presence: Presence) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), role, presence }
    }

    pub fn initials(&self) -> String {
        self.name.split_whitespace().filter_map(|p| p.chars().next()).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            MessageStatus::Sent => "✓",
            MessageStatus::Delivered | MessageStatus::Read => "✓✓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub age_minutes: u32,
    pub status: MessageStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<Contact>,
    pub messages: Vec<Message>,
    pub unread: u32,
    pub group_name: Option<String>,
}

impl Conversation {
    pub fn is_group(&self) -> bool {
        self.group_name.is_some()
    }

    /// Group name, or the first participant who is not `me`.
    pub fn display_name(&self, me: &str) -> String {
        match &self.group_name {
            Some(name) => name.clone(),
            None => self
                .participants
                .iter()
                .find(|p| p.id != me)
                .map_or_else(|| "Unknown".to_owned(), |p| p.name.clone()),
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Inbox tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InboxTab {
    #[default]
    All,
    Unread,
    Groups,
    Direct,
}

impl InboxTab {
    pub const ALL: [InboxTab; 4] = [InboxTab::All, InboxTab::Unread, InboxTab::Groups, InboxTab::Direct];

    pub fn label(self) -> &'static str {
        match self {
            InboxTab::All => "All",
            InboxTab::Unread => "Unread",
            InboxTab::Groups => "Groups",
            InboxTab::Direct => "Direct",
        }
    }

    fn admits(self, conversation: &Conversation) -> bool {
        match self {
            InboxTab::All => true,
            InboxTab::Unread => conversation.unread > 0,
            InboxTab::Groups => conversation.is_group(),
            InboxTab::Direct => !conversation.is_group(),
        }
    }
}

/// Conversations whose display name matches `query` and that belong in `tab`.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    me: &str,
    tab: InboxTab,
    query: &str,
) -> Vec<&'a Conversation> {
    conversations
        .iter()
        .filter(|c| matches_query(&c.display_name(me), query))
        .filter(|c| tab.admits(c))
        .collect()
}

/// "just now", "N min", "N h", "Yesterday", or "N days".
pub fn age_label(age_minutes: u32) -> String {
    match age_minutes {
        0 => "just now".to_owned(),
        1..=59 => format!("{age_minutes} min"),
        60..=1439 => format!("{} h", age_minutes / 60),
        1440..=2879 => "Yesterday".to_owned(),
        _ => format!("{} days", age_minutes / 1440),
    }
}

/// People a new conversation can be started with.
pub fn directory() -> Vec<Contact> {
    vec![
        Contact::new("user1", "Emma Thompson", Role::Student, Presence::Online),
        Contact::new("user2", "Michael Johnson", Role::Parent, Presence::Offline),
        Contact::new("user3", "Sophia Martinez", Role::Student, Presence::Away),
        Contact::new("user4", "Daniel Wilson", Role::Student, Presence::Online),
        Contact::new("user5", "Olivia Brown", Role::Student, Presence::Offline),
        Contact::new("user6", "Principal Anderson", Role::Admin, Presence::Online),
        Contact::new("user7", "Ms. Garcia", Role::Teacher, Presence::Online),
        Contact::new("user8", "Mr. Taylor", Role::Teacher, Presence::Away),
    ]
}

fn msg(id: &str, sender_id: &str, text: &str, age_minutes: u32, status: MessageStatus) -> Message {
    Message {
        id: id.to_owned(),
        sender_id: sender_id.to_owned(),
        text: text.to_owned(),
        age_minutes,
        status,
    }
}

fn contact(id: &str) -> Contact {
    directory()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| Contact::new(id, id, Role::Student, Presence::Offline))
}

/// Demo inbox for `me`.
pub fn sample_conversations(me: &Contact) -> Vec<Conversation> {
    use MessageStatus::{Delivered, Read};

    let with = |ids: &[&str]| {
        let mut people = vec![me.clone()];
        people.extend(ids.iter().map(|id| contact(id)));
        people
    };
    vec![
        Conversation {
            id: "conv1".to_owned(),
            participants: with(&["user1"]),
            messages: vec![
                msg("msg1-1", "user1", "Hello, I have a question about the homework assignment.", 30, Read),
                msg("msg1-2", &me.id, "Sure, what's your question?", 25, Read),
                msg(
                    "msg1-3",
                    "user1",
                    "I'm having trouble with problem #5. Could you explain how to approach it?",
                    20,
                    Read,
                ),
                msg(
                    "msg1-4",
                    &me.id,
                    "For problem #5, you need to use the quadratic formula. First, identify a, b, and c.",
                    15,
                    Read,
                ),
                msg("msg1-5", "user1", "Oh, I see! Thank you!", 5, Read),
            ],
            unread: 0,
            group_name: None,
        },
        Conversation {
            id: "conv2".to_owned(),
            participants: with(&["user2"]),
            messages: vec![msg(
                "msg2",
                &me.id,
                "Thank you for attending the parent-teacher meeting.",
                120,
                Delivered,
            )],
            unread: 0,
            group_name: None,
        },
        Conversation {
            id: "conv3".to_owned(),
            participants: with(&["user3", "user4", "user5"]),
            messages: vec![msg("msg3", "user4", "When is our group project due?", 1440, Read)],
            unread: 2,
            group_name: Some("Physics Project Group".to_owned()),
        },
        Conversation {
            id: "conv4".to_owned(),
            participants: with(&["user6"]),
            messages: vec![msg("msg4", "user6", "Please submit your quarterly reports by Friday.", 2880, Read)],
            unread: 0,
            group_name: None,
        },
    ]
}

/// Messaging page state.
#[derive(Clone, Debug)]
pub struct MessagingState {
    pub me: Contact,
    pub conversations: Vec<Conversation>,
    pub selected: Option<String>,
    pub tab: InboxTab,
    pub query: String,
    pub draft: String,
    /// Contacts picked in the new-conversation dialog.
    pub picked: Vec<Contact>,
}

impl MessagingState {
    /// Inbox for the signed-in `user`, opened on the first conversation.
    pub fn for_user(user: &User) -> Self {
        let me = Contact::new(&user.id, &user.name, user.role, Presence::Online);
        let conversations = sample_conversations(&me);
        let selected = conversations.first().map(|c| c.id.clone());
        Self {
            me,
            conversations,
            selected,
            tab: InboxTab::default(),
            query: String::new(),
            draft: String::new(),
            picked: Vec::new(),
        }
    }

    pub fn visible(&self) -> Vec<&Conversation> {
        filter_conversations(&self.conversations, &self.me.id, self.tab, &self.query)
    }

    pub fn current(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Open a conversation and mark it read.
    pub fn select(&mut self, id: &str) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.unread = 0;
            self.selected = Some(conversation.id.clone());
        }
    }

    /// Append the draft to the open conversation. Blank drafts and a missing
    /// selection are ignored. Returns the new message id.
    pub fn send(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.selected.clone()?;
        let conversation = self.conversations.iter_mut().find(|c| c.id == id)?;
        let message = Message {
            id: format!("msg-{}", Uuid::new_v4()),
            sender_id: self.me.id.clone(),
            text: text.to_owned(),
            age_minutes: 0,
            status: MessageStatus::Sent,
        };
        let message_id = message.id.clone();
        conversation.messages.push(message);
        log::debug!("message {message_id} queued in {id}");
        self.draft.clear();
        Some(message_id)
    }

    pub fn is_picked(&self, contact_id: &str) -> bool {
        self.picked.iter().any(|c| c.id == contact_id)
    }

    /// Add or remove a contact from the new-conversation selection.
    pub fn toggle_pick(&mut self, contact: &Contact) {
        if self.is_picked(&contact.id) {
            self.picked.retain(|c| c.id != contact.id);
        } else {
            self.picked.push(contact.clone());
        }
    }

    /// Start a conversation with the picked contacts and open it. More than
    /// one pick makes a group. Returns `None` when nobody is picked.
    pub fn create_conversation(&mut self) -> Option<String> {
        if self.picked.is_empty() {
            return None;
        }
        let picked = std::mem::take(&mut self.picked);
        let group_name = (picked.len() > 1)
            .then(|| picked.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", "));
        let mut participants = vec![self.me.clone()];
        participants.extend(picked);
        let id = format!("conv-{}", Uuid::new_v4());
        self.conversations.insert(
            0,
            Conversation {
                id: id.clone(),
                participants,
                messages: Vec::new(),
                unread: 0,
                group_name,
            },
        );
        self.selected = Some(id.clone());
        Some(id)
    }
}
