use std::collections::BTreeSet;

use quickcheck::{quickcheck, TestResult};
use word_trie::{compare, Trie};

// Keeps generated words short and off the codec's marker characters
fn clean(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.chars().filter(|c| *c != ']' && *c != '>').take(8).collect())
        .collect()
}

fn word_set(words: &[String]) -> BTreeSet<String> {
    words.iter().cloned().collect()
}

quickcheck! {
    fn prop_insert_then_contains(words: Vec<String>, word: String) -> bool {
        let mut trie = Trie::from_words(&words);
        let was_member = words.contains(&word);
        if trie.contains(&word) != was_member {
            return false;
        }

        trie.insert(&word);
        trie.extend(words.iter().filter(|w| **w != word));
        trie.contains(&word)
    }

    fn prop_insert_is_idempotent(words: Vec<String>) -> bool {
        let once = Trie::from_words(&words);
        let mut twice = once.clone();
        twice.extend(&words);

        once.len() == twice.len() && once.words() == twice.words()
    }

    fn prop_len_matches_distinct_words(words: Vec<String>) -> bool {
        let trie = Trie::from_words(&words);
        let expected = word_set(&words);

        trie.len() == expected.len()
            && trie.words() == expected.into_iter().collect::<Vec<_>>()
    }

    fn prop_remove_undoes_insert(words: Vec<String>, word: String) -> TestResult {
        let mut trie = Trie::from_words(&words);
        if trie.contains(&word) {
            return TestResult::discard();
        }
        let before = trie.clone();

        trie.insert(&word);
        trie.remove(&word);

        TestResult::from_bool(
            trie.len() == before.len()
                && trie.words() == before.words()
                && trie.root() == before.root(),
        )
    }

    fn prop_remove_non_member_is_noop(words: Vec<String>, word: String) -> TestResult {
        let mut trie = Trie::from_words(&words);
        if trie.contains(&word) {
            return TestResult::discard();
        }
        let before = trie.clone();

        TestResult::from_bool(!trie.remove(&word) && trie.root() == before.root())
    }

    fn prop_remove_all_empties(words: Vec<String>) -> bool {
        let mut trie = Trie::from_words(&words);
        for word in &words {
            trie.remove(word);
        }
        trie.is_empty() && trie.root().is_vacant()
    }

    fn prop_prefix_count_matches_listing(words: Vec<String>, prefix: String) -> bool {
        let trie = Trie::from_words(&words);
        let listed = trie.words();

        let expected = listed.iter().filter(|w| w.starts_with(prefix.as_str())).count();
        trie.count_with_prefix(&prefix) == expected
            && trie.count_with_prefix("") == trie.len()
    }

    fn prop_suggest_matches_filter(words: Vec<String>, prefix: String) -> bool {
        let trie = Trie::from_words(&words);
        let expected: Vec<String> = trie
            .words()
            .into_iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .collect();

        match trie.suggest(&prefix) {
            Ok(found) => found.collect::<Vec<_>>() == expected,
            // An unknown prefix can only mean nothing starts with it
            Err(_) => expected.is_empty(),
        }
    }

    fn prop_serialization_round_trip(words: Vec<String>) -> bool {
        let trie = Trie::from_words(clean(words));
        let encoded = trie.serialize().unwrap();
        let decoded = Trie::deserialize(&encoded).unwrap();

        decoded.len() == trie.len()
            && word_set(&decoded.words()) == word_set(&trie.words())
            && decoded.root() == trie.root()
    }

    fn prop_compare_matches_word_sets(a: Vec<String>, b: Vec<String>) -> bool {
        let t1 = Trie::from_words(&a);
        let t2 = Trie::from_words(&b);

        compare(&t1, &t2) == (word_set(&a) == word_set(&b))
    }

    fn prop_compare_ignores_insertion_order(words: Vec<String>) -> bool {
        let forward = Trie::from_words(&words);
        let backward = Trie::from_words(words.iter().rev());

        compare(&forward, &backward)
    }
}
