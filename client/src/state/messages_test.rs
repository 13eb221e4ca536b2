use super::*;
use crate::net::mock;

fn teacher_inbox() -> MessagingState {
    MessagingState::for_user(&mock::demo_user(Role::Teacher, "t@example.com"))
}

fn ids(conversations: &[&Conversation]) -> Vec<String> {
    conversations.iter().map(|c| c.id.clone()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn tabs_split_groups_from_direct() {
    let inbox = teacher_inbox();
    let me = inbox.me.id.clone();
    let convs = &inbox.conversations;
    assert_eq!(filter_conversations(convs, &me, InboxTab::All, "").len(), 4);
    assert_eq!(ids(&filter_conversations(convs, &me, InboxTab::Groups, "")), vec!["conv3"]);
    assert_eq!(ids(&filter_conversations(convs, &me, InboxTab::Unread, "")), vec!["conv3"]);
    assert_eq!(filter_conversations(convs, &me, InboxTab::Direct, "").len(), 3);
}

#[test]
fn search_matches_other_participant_or_group_name() {
    let inbox = teacher_inbox();
    let me = inbox.me.id.clone();
    let convs = &inbox.conversations;
    assert_eq!(ids(&filter_conversations(convs, &me, InboxTab::All, "emma")), vec!["conv1"]);
    assert_eq!(ids(&filter_conversations(convs, &me, InboxTab::All, "PHYSICS")), vec!["conv3"]);
    assert!(filter_conversations(convs, &me, InboxTab::Direct, "physics").is_empty());
}

#[test]
fn display_name_skips_self() {
    let inbox = teacher_inbox();
    let conv = &inbox.conversations[1];
    assert_eq!(conv.display_name(&inbox.me.id), "Michael Johnson");
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_appends_sent_message_and_clears_draft() {
    let mut inbox = teacher_inbox();
    inbox.draft = "  See you tomorrow  ".to_owned();
    let id = inbox.send().unwrap();

    let last = inbox.current().and_then(Conversation::last_message).unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.text, "See you tomorrow");
    assert_eq!(last.status, MessageStatus::Sent);
    assert_eq!(last.sender_id, "teacher-1");
    assert!(inbox.draft.is_empty());
}

#[test]
fn blank_draft_is_ignored() {
    let mut inbox = teacher_inbox();
    let before = inbox.current().unwrap().messages.len();
    inbox.draft = "   ".to_owned();
    assert_eq!(inbox.send(), None);
    assert_eq!(inbox.current().unwrap().messages.len(), before);
}

#[test]
fn selecting_clears_unread() {
    let mut inbox = teacher_inbox();
    inbox.select("conv3");
    assert_eq!(inbox.current().map(|c| c.unread), Some(0));
    inbox.select("missing");
    assert_eq!(inbox.selected.as_deref(), Some("conv3"));
}

// =============================================================
// New conversation
// =============================================================

#[test]
fn toggle_pick_adds_then_removes() {
    let mut inbox = teacher_inbox();
    let garcia = directory().into_iter().find(|c| c.id == "user7").unwrap();
    inbox.toggle_pick(&garcia);
    assert!(inbox.is_picked("user7"));
    inbox.toggle_pick(&garcia);
    assert!(!inbox.is_picked("user7"));
}

#[test]
fn create_conversation_requires_a_pick() {
    let mut inbox = teacher_inbox();
    assert_eq!(inbox.create_conversation(), None);
    assert_eq!(inbox.conversations.len(), 4);
}

#[test]
fn create_conversation_opens_direct_or_group() {
    let mut inbox = teacher_inbox();
    let people = directory();
    inbox.toggle_pick(&people[6]);
    let id = inbox.create_conversation().unwrap();
    let conv = inbox.current().unwrap();
    assert_eq!(conv.id, id);
    assert!(!conv.is_group());
    assert_eq!(conv.participants.len(), 2);
    assert!(inbox.picked.is_empty());

    inbox.toggle_pick(&people[6]);
    inbox.toggle_pick(&people[7]);
    inbox.create_conversation().unwrap();
    let conv = inbox.current().unwrap();
    assert_eq!(conv.group_name.as_deref(), Some("Ms. Garcia, Mr. Taylor"));
}

#[test]
fn age_labels() {
    assert_eq!(age_label(0), "just now");
    assert_eq!(age_label(5), "5 min");
    assert_eq!(age_label(120), "2 h");
    assert_eq!(age_label(1440), "Yesterday");
    assert_eq!(age_label(2880), "2 days");
}
