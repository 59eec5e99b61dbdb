use super::*;

#[test]
fn test_newest_first_with_en_dash() {
    let mut recent = RecentList::default();
    recent.push("猫", "cat");
    recent.push("狗", "dog");

    let items: Vec<&str> = recent.items().collect();
    assert_eq!(items, vec!["狗 – dog", "猫 – cat"]);
}

#[test]
fn test_bounded_to_limit() {
    let mut recent = RecentList::default();
    for i in 0..20 {
        recent.push(&format!("w{}", i), &format!("t{}", i));
    }

    assert_eq!(recent.limit(), DEFAULT_RECENT_LIMIT);
    assert_eq!(recent.len(), DEFAULT_RECENT_LIMIT);
    assert_eq!(recent.items().next(), Some("w19 – t19"));
    // Oldest surviving item is the 15th most recent
    assert_eq!(recent.items().last(), Some("w5 – t5"));
}

#[test]
fn test_zero_limit_keeps_nothing() {
    let mut recent = RecentList::new(0);
    recent.push("a", "b");
    assert!(recent.is_empty());
}
