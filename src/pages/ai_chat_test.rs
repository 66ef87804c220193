use super::*;

#[test]
fn conversation_preserves_order_and_roles() {
    let entries = vec![
        ChatEntry::new(ChatRole::User, "hello".to_owned()),
        ChatEntry::new(ChatRole::Assistant, "hi".to_owned()),
        ChatEntry::new(ChatRole::User, "help me".to_owned()),
    ];
    let messages = conversation(&entries);
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, ChatRole::User);
    assert_eq!(messages[1].role, ChatRole::Assistant);
    assert_eq!(messages[2].content, "help me");
}

#[test]
fn entries_get_distinct_ids() {
    let a = ChatEntry::new(ChatRole::User, "x".to_owned());
    let b = ChatEntry::new(ChatRole::User, "x".to_owned());
    assert_ne!(a.id, b.id);
}

#[test]
fn empty_replies_fall_back_to_a_message() {
    assert_eq!(reply_content("  \n".to_owned()), EMPTY_REPLY_FALLBACK);
    assert_eq!(reply_content("real answer".to_owned()), "real answer");
}
