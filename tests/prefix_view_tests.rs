use std::collections::HashSet;
use word_trie::{Error, Trie};

#[test]
fn test_prefix_view_creation() {
    let trie = Trie::from_words(vec!["hello", "help", "world"]);

    // Create a view with a prefix that exists
    let view = trie.view_subtrie("hel");

    // Basic properties
    assert!(view.exists());
    assert_eq!(view.prefix(), "hel");
    assert_eq!(view.trie(), &trie);
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());
}

#[test]
fn test_suggest_scenario() {
    let mut trie = Trie::from_words(vec!["cat", "car", "cart", "dog"]);

    assert_eq!(trie.len(), 4);
    assert_eq!(trie.count_with_prefix("ca"), 3);
    assert_eq!(trie.count_with_prefix("do"), 1);
    assert!(!trie.contains("ca"));
    assert!(trie.contains("cat"));

    let suggested: HashSet<String> = trie.suggest("ca").unwrap().collect();
    let expected: HashSet<String> = ["cat", "car", "cart"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(suggested, expected);

    assert!(trie.remove("car"));
    assert_eq!(trie.count_with_prefix("ca"), 2);
    assert!(!trie.contains("car"));
    assert!(trie.contains("cart"));

    // "car" is still a path to "cart", so the prefix is known
    let after: Vec<String> = trie.suggest("car").unwrap().collect();
    assert_eq!(after, vec!["cart"]);
}

#[test]
fn test_suggest_order() {
    // Insert words deliberately not in lexicographic order
    let trie = Trie::from_words(vec![
        "zebra",
        "apple",
        "banana",
        "cherry",
        "date",
        "apricot",
        "blueberry",
        "blackberry",
    ]);

    let a_words: Vec<String> = trie.suggest("a").unwrap().collect();
    assert_eq!(a_words, vec!["apple", "apricot"]);

    let b_words: Vec<String> = trie.suggest("b").unwrap().collect();
    assert_eq!(b_words, vec!["banana", "blackberry", "blueberry"]);

    // A word comes out before its extensions
    let nested = Trie::from_words(vec!["abcd", "abc", "abce", "abd", "ab"]);
    let ab_words: Vec<String> = nested.suggest("ab").unwrap().collect();
    assert_eq!(ab_words, vec!["ab", "abc", "abcd", "abce", "abd"]);
}

#[test]
fn test_suggest_missing_prefix() {
    let trie = Trie::from_words(vec!["hello", "world"]);

    match trie.suggest("xyz") {
        Err(Error::PrefixNotFound(prefix)) => assert_eq!(prefix, "xyz"),
        other => panic!("expected PrefixNotFound, got {:?}", other.map(|w| w.count())),
    }

    let view = trie.view_subtrie("xyz");
    assert!(!view.exists());
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(!view.contains("hello"));

    // On an empty trie only the empty prefix exists, and it yields nothing
    let empty = Trie::new();
    assert_eq!(empty.suggest("").unwrap().count(), 0);
    assert!(empty.suggest("a").is_err());
}

#[test]
fn test_suggest_empty_prefix_lists_everything() {
    let trie = Trie::from_words(vec!["b", "a", ""]);

    let all: Vec<String> = trie.suggest("").unwrap().collect();
    assert_eq!(all, vec!["", "a", "b"]);
    assert_eq!(all, trie.words());
}

#[test]
fn test_prefix_view_subtree_equality() {
    let trie1 = Trie::from_words(vec!["a", "b", "c"]);

    // Access the same subtree twice
    let view1 = trie1.view_subtrie("a");
    let view2 = trie1.view_subtrie("a");
    assert_eq!(view1, view2);

    // Leaves holding only their own word are equal wherever they are
    assert_eq!(trie1.view_subtrie("a"), trie1.view_subtrie("c"));

    // Views survive changes to other tries
    let mut trie2 = trie1.clone();
    trie2.insert("ab");
    assert_ne!(trie1.view_subtrie("a"), trie2.view_subtrie("a"));
    assert_eq!(trie1.view_subtrie("b"), trie2.view_subtrie("b"));
}

#[test]
fn test_prefix_view_iteration() {
    let trie = Trie::from_words(vec!["team", "tea", "ten", "to"]);
    let view = trie.view_subtrie("te");

    let mut words = Vec::new();
    for word in &view {
        words.push(word);
    }
    assert_eq!(words, vec!["tea", "team", "ten"]);

    // Iterating again starts from the top
    assert_eq!(view.iter().count(), 3);
}
