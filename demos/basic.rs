//! Walkthrough of the word trie API
use word_trie::{compare, Trie};

fn main() {
    // Build a trie from a word list
    let mut trie = Trie::from_words(vec!["cat", "car", "cart", "dog"]);
    let serialized = trie.serialize().unwrap();
    println!("serialized: {}", serialized);
    println!("total words: {}", trie.len());

    // Insert more words
    trie.extend(vec!["do", "dot", "cat"]);
    let serialized = trie.serialize().unwrap();
    println!("new serialized: {}", serialized);

    let word = "cart";
    if trie.contains(word) {
        println!("{} is present in the trie", word);
    } else {
        println!("{} is not present in the trie", word);
    }

    // Rebuild a second trie from the serialized form
    let mut copy = Trie::deserialize(&serialized).unwrap();
    println!("copy: {}", copy.words().join(" "));
    println!("tries equal: {}", compare(&trie, &copy));

    copy.remove("car");
    println!("copy after removing 'car': {}", copy.words().join(" "));
    println!("words with prefix 'ca': {}", copy.count_with_prefix("ca"));
    println!("tries equal: {}", compare(&trie, &copy));

    for prefix in &["ca", "x"] {
        match copy.suggest(prefix) {
            Ok(words) => println!("'{}': {}", prefix, words.collect::<Vec<_>>().join(" ")),
            Err(err) => println!("'{}': {}", prefix, err),
        }
    }
}
