// ArrayList integration suite.
//
// Each test documents the behavior being verified. Core invariants:
// - Ordering: elements keep insertion/modification order in [0, len).
// - Bounds: get/remove need index < len, insert needs index <= len; a
//   failing call reports the index and length and changes nothing.
// - Storage: capacity starts at 10 and doubles; clear keeps it.
// - Sorting: quick_sort yields an ascending permutation of the input.
use custom_collections::{ArrayList, Error};

fn contents<T: Clone>(l: &ArrayList<T>) -> Vec<T> {
    l.iter().cloned().collect()
}

// Test: append then index.
// Verifies: get(i) returns the i-th added element.
#[test]
fn add_and_get() {
    let mut l = ArrayList::new();
    l.add(10);
    l.add(20);
    l.add(30);
    assert_eq!(l.get(0), Ok(&10));
    assert_eq!(l.get(1), Ok(&20));
    assert_eq!(l.get(2), Ok(&30));
}

// Test: positional insert into the middle.
// Verifies: [A, C] + insert(1, B) == [A, B, C].
#[test]
fn add_at_index() {
    let mut l = ArrayList::new();
    l.add("A");
    l.add("C");
    l.insert(1, "B").expect("index 1 is within 0..=len");
    assert_eq!(contents(&l), vec!["A", "B", "C"]);
}

// Test: removal shifts left.
// Verifies: [X, Y] - remove(0) == [Y] with len 1.
#[test]
fn remove_shifts_left() {
    let mut l = ArrayList::new();
    l.add("X".to_string());
    l.add("Y".to_string());
    assert_eq!(l.remove(0), Ok("X".to_string()));
    assert_eq!(l.get(0).map(String::as_str), Ok("Y"));
    assert_eq!(l.len(), 1);
}

// Test: len through adds and removes.
#[test]
fn size_tracks_net_insertions() {
    let mut l = ArrayList::new();
    assert_eq!(l.len(), 0);
    l.add(1);
    l.add(2);
    assert_eq!(l.len(), 2);
    l.remove(1).unwrap();
    assert_eq!(l.len(), 1);
}

// Test: clear.
// Verifies: len 0 afterwards and get(0) reports out of bounds.
#[test]
fn clear_resets() {
    let mut l = ArrayList::new();
    l.add(5);
    l.add(10);
    l.clear();
    assert_eq!(l.len(), 0);
    assert!(l.is_empty());
    assert_eq!(l.get(0), Err(Error::IndexOutOfBounds { index: 0, len: 0 }));
    l.add(7);
    assert_eq!(l.get(0), Ok(&7));
}

// Test: out-of-range access on several list states.
// Verifies: get(len) and get(usize::MAX) fail and the list is unchanged.
#[test]
fn out_of_range_does_not_mutate() {
    let mut l = ArrayList::new();
    for n in 0..4 {
        let before = contents(&l);
        assert!(l.get(l.len()).is_err());
        assert!(l.get(usize::MAX).is_err());
        assert!(l.remove(l.len()).is_err());
        assert!(l.insert(l.len() + 1, -1).is_err());
        assert_eq!(contents(&l), before);
        l.add(n);
    }
}

// Test: error rendering.
// Verifies: the message names both the index and the length.
#[test]
fn error_message_carries_context() {
    let l: ArrayList<u8> = ArrayList::new();
    let err = l.get(3).unwrap_err();
    assert_eq!(err.to_string(), "index 3 out of bounds for list of length 0");
}

// Test: quick_sort on the canonical small case and on larger inputs.
// Verifies: ascending order; idempotence; sorted and reverse-sorted inputs.
#[test]
fn quick_sort_sorts() {
    let mut l = ArrayList::new();
    for x in [3, 1, 2] {
        l.add(x);
    }
    l.quick_sort();
    assert_eq!(contents(&l), vec![1, 2, 3]);
    l.quick_sort();
    assert_eq!(contents(&l), vec![1, 2, 3]);

    let mut rev = ArrayList::new();
    for x in (0..300).rev() {
        rev.add(x);
    }
    rev.quick_sort();
    assert_eq!(contents(&rev), (0..300).collect::<Vec<_>>());
}

// Test: quick_sort on strings.
#[test]
fn quick_sort_strings() {
    let mut l = ArrayList::new();
    for s in ["pear", "apple", "fig", "banana", "apple"] {
        l.add(s.to_string());
    }
    l.quick_sort();
    assert_eq!(contents(&l), vec!["apple", "apple", "banana", "fig", "pear"]);
}

// Test: contains after mutations.
#[test]
fn contains_follows_mutations() {
    let mut l = ArrayList::new();
    l.add("a");
    assert!(l.contains(&"a"));
    assert!(!l.contains(&"b"));
    l.insert(0, "b").unwrap();
    assert!(l.contains(&"b"));
    l.clear();
    assert!(!l.contains(&"a"));
}

// Test: growth across several doublings.
// Verifies: capacity 10 -> 20 -> 40 and all elements intact.
#[test]
fn growth_sequence() {
    let mut l = ArrayList::new();
    assert_eq!(l.capacity(), 10);
    for i in 0..25 {
        l.add(i);
    }
    assert_eq!(l.capacity(), 40);
    assert!(l.iter().copied().eq(0..25));
    l.clear();
    assert_eq!(l.capacity(), 40);
}
