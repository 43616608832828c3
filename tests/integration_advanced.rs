//! Integration tests for shuffling, sorting, the set helpers and invoke.
//!
//! Run with: cargo test --test integration_advanced

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use underbar::{
    difference, first, first_n, flatten, flatten_shallow, intersection, invoke, last, last_n,
    shuffle, shuffle_with, sort_by, sort_by_property, zip, MethodName, UnderbarError,
};

// ============================================================================
// shuffle
// ============================================================================

#[test]
fn test_shuffle_does_not_modify_input() {
    let numbers = [4_i32, 5, 6];
    let _ = shuffle(&numbers);
    assert_eq!(numbers, [4, 5, 6]);
}

#[test]
fn test_shuffle_keeps_the_same_elements() {
    let numbers = [4_i32, 5, 6];
    let mut shuffled = shuffle(&numbers);
    shuffled.sort_unstable();
    assert_eq!(shuffled, vec![4, 5, 6]);
}

#[test]
fn test_shuffle_changes_the_order() {
    let numbers: Vec<u32> = (1..=10).collect();
    let mut rng = StdRng::seed_from_u64(42);

    // ten elements come back in input order with probability 1 / 10!
    let moved = (0..5)
        .filter(|_| shuffle_with(&numbers, &mut rng) != numbers)
        .count();
    assert!(moved >= 4);
}

#[test]
fn test_shuffle_is_reproducible_with_a_seed() {
    let letters = ["a", "b", "c", "d", "e", "f"];
    let once = shuffle_with(&letters, &mut StdRng::seed_from_u64(9));
    let again = shuffle_with(&letters, &mut StdRng::seed_from_u64(9));
    assert_eq!(once, again);
}

// ============================================================================
// first / last
// ============================================================================

#[test]
fn test_first_and_last_with_counts() {
    let numbers = [1, 2, 3, 4];
    assert_eq!(first(&numbers), Some(&1));
    assert_eq!(last(&numbers), Some(&4));
    assert_eq!(first_n(&numbers, 2), vec![1, 2]);
    assert_eq!(last_n(&numbers, 2), vec![3, 4]);
    assert_eq!(first_n(&numbers, 10), vec![1, 2, 3, 4]);
    assert_eq!(last_n(&numbers, 0), Vec::<i32>::new());
    assert_eq!(first::<i32>(&[]), None);
}

// ============================================================================
// sort_by
// ============================================================================

#[test]
fn test_sort_by_string_length_is_stable() {
    let words = ["banana", "kiwi", "apple", "fig", "pear"];
    assert_eq!(
        sort_by(&words, |word| word.len()),
        vec!["fig", "kiwi", "pear", "apple", "banana"]
    );
}

#[test]
fn test_sort_by_property_of_records() {
    let people = json!([
        {"name": "curly", "age": 50},
        {"name": "moe", "age": 30},
        {"name": "shemp"},
        {"name": "larry", "age": 40},
    ]);

    let names: Vec<Value> = sort_by_property(&people, "age")
        .into_iter()
        .map(|person| person["name"].clone())
        .collect();

    assert_eq!(names, vec![json!("moe"), json!("larry"), json!("curly"), json!("shemp")]);
}

// ============================================================================
// zip / flatten
// ============================================================================

#[test]
fn test_zip_pads_shorter_arrays() {
    let names: &[&str] = &["moe", "larry", "curly"];
    let roles: &[&str] = &["leader", "sidekick"];

    assert_eq!(
        zip(&[names, roles]),
        vec![
            vec![Some("moe"), Some("leader")],
            vec![Some("larry"), Some("sidekick")],
            vec![Some("curly"), None],
        ]
    );
    assert!(zip::<i32>(&[]).is_empty());
}

#[test]
fn test_flatten_deeply_nested_arrays() {
    let nested = json!([1, [2], [3, [[[4]]]], []]);
    assert_eq!(flatten(&nested), vec![json!(1), json!(2), json!(3), json!(4)]);
    assert_eq!(flatten(&json!("solo")), vec![json!("solo")]);
}

#[test]
fn test_flatten_shallow_removes_one_level() {
    let nested = vec![vec![1, 2], vec![], vec![3]];
    assert_eq!(flatten_shallow(&nested), vec![1, 2, 3]);
}

// ============================================================================
// intersection / difference
// ============================================================================

#[test]
fn test_intersection_of_several_arrays() {
    let stooges: &[&str] = &["moe", "curly", "larry", "moe"];
    let leaders: &[&str] = &["moe", "groucho", "larry"];
    let named: &[&str] = &["larry", "moe"];

    assert_eq!(intersection(&[stooges, leaders, named]), vec!["moe", "larry"]);
    assert!(intersection::<i32>(&[]).is_empty());
}

#[test]
fn test_difference_against_several_arrays() {
    let numbers: &[i32] = &[1, 2, 3, 4, 5];
    let odd_ones: &[i32] = &[5, 2, 10];
    let ones: &[i32] = &[1];
    assert_eq!(difference(numbers, &[odd_ones, ones]), vec![3, 4]);
    assert_eq!(difference(numbers, &[]), vec![1, 2, 3, 4, 5]);
}

// ============================================================================
// invoke
// ============================================================================

#[test]
fn test_invoke_with_a_closure() {
    let words = ["dog", "cat"];
    let upper = invoke(
        &words,
        |word: &&str, _: &[Value]| Value::from(word.to_uppercase()),
        &[],
    )
    .unwrap();
    assert_eq!(upper, vec![json!("DOG"), json!("CAT")]);
}

#[test]
fn test_invoke_by_method_name() {
    let lists = json!([[5, 1, 7], [3, 2, 1]]);
    assert_eq!(
        invoke(&lists, MethodName("sort"), &[]).unwrap(),
        vec![json!([1, 5, 7]), json!([1, 2, 3])]
    );

    let words = vec!["ab".to_string(), "c".to_string()];
    assert_eq!(
        invoke(&words, MethodName("repeat"), &[json!(2)]).unwrap(),
        vec![json!("abab"), json!("cc")]
    );
}

#[test]
fn test_invoke_unknown_method_fails() {
    let values = json!(["text", null]);
    let err = invoke(&values, MethodName("to_uppercase"), &[]).unwrap_err();
    assert!(matches!(err, UnderbarError::UnknownMethod { .. }));
}
