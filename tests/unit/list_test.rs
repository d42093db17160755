//! Black-box tests for the linked-list core
//!
//! Exercises the public API only: insert at both ends, first-match deletion,
//! and the `{data, next}` snapshot records.

use listd::list::{LinkedList, NodeRecord};
use serde_json::{Value, json};

fn record<T>(data: T, next: Option<T>) -> NodeRecord<T> {
    NodeRecord { data, next }
}

// =============================================================================
// LENGTH ACCOUNTING
// =============================================================================

mod length_tests {
    use super::*;

    #[test]
    fn test_snapshot_length_tracks_inserts_and_deletes() {
        let mut list = LinkedList::new();
        for value in [10, 20, 30, 40] {
            list.insert_at_end(value);
        }
        assert_eq!(list.snapshot().len(), 4);

        assert!(list.delete_node(&20));
        assert!(list.delete_node(&40));
        assert_eq!(list.snapshot().len(), 2);

        list.insert_at_start(50);
        assert_eq!(list.snapshot().len(), 3);
    }

    #[test]
    fn test_failed_delete_does_not_change_length() {
        let mut list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
        assert!(!list.delete_node(&7));
        assert_eq!(list.snapshot().len(), 3);
    }
}

// =============================================================================
// INSERTION ORDER
// =============================================================================

mod insert_tests {
    use super::*;

    #[test]
    fn test_insert_at_start_becomes_first_record() {
        let mut list: LinkedList<i64> = [1, 2].into_iter().collect();
        list.insert_at_start(9);
        assert_eq!(list.snapshot()[0].data, 9);
    }

    #[test]
    fn test_insert_at_end_becomes_last_record_with_no_next() {
        let mut list: LinkedList<i64> = [1, 2].into_iter().collect();
        list.insert_at_end(9);
        let snapshot = list.snapshot();
        let last = snapshot.last().unwrap();
        assert_eq!(last.data, 9);
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_insert_at_end_on_empty_list_sets_head() {
        let mut list = LinkedList::new();
        list.insert_at_end(42);
        assert_eq!(list.snapshot(), vec![record(42, None)]);
    }
}

// =============================================================================
// DELETION
// =============================================================================

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_on_empty_list_is_a_reported_miss() {
        let mut list: LinkedList<i64> = LinkedList::new();
        assert!(!list.delete_node(&1));
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_removes_only_first_occurrence() {
        let mut list: LinkedList<i64> = [1, 2, 1].into_iter().collect();
        assert!(list.delete_node(&1));
        assert_eq!(list.snapshot(), vec![record(2, Some(1)), record(1, None)]);
    }

    #[test]
    fn test_delete_head_value() {
        let mut list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
        assert!(list.delete_node(&1));
        assert_eq!(list.snapshot(), vec![record(2, Some(3)), record(3, None)]);
    }

    #[test]
    fn test_delete_missing_value_leaves_snapshot_unchanged() {
        let mut list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
        let before = list.snapshot();
        assert!(!list.delete_node(&99));
        assert_eq!(list.snapshot(), before);
    }
}

// =============================================================================
// SNAPSHOT SHAPE
// =============================================================================

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_round_trip_one_two_three() {
        let mut list = LinkedList::new();
        for value in [1, 2, 3] {
            list.insert_at_end(value);
        }
        assert_eq!(
            list.snapshot(),
            vec![record(1, Some(2)), record(2, Some(3)), record(3, None)]
        );
    }

    #[test]
    fn test_snapshot_serializes_tail_next_as_null() {
        let list: LinkedList<i64> = [7].into_iter().collect();
        let json = serde_json::to_value(list.snapshot()).unwrap();
        assert_eq!(json, json!([{"data": 7, "next": null}]));
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let list: LinkedList<i64> = [1, 2].into_iter().collect();
        let first = list.snapshot();
        let second = list.snapshot();
        assert_eq!(first, second);
    }
}

// =============================================================================
// OPAQUE PAYLOADS
// =============================================================================

mod payload_tests {
    use super::*;

    #[test]
    fn test_json_payloads_are_stored_verbatim() {
        let mut list: LinkedList<Value> = LinkedList::new();
        list.insert_at_end(json!("alpha"));
        list.insert_at_end(json!({"k": [1, 2]}));
        list.insert_at_end(json!(3.5));

        assert_eq!(
            list.snapshot(),
            vec![
                record(json!("alpha"), Some(json!({"k": [1, 2]}))),
                record(json!({"k": [1, 2]}), Some(json!(3.5))),
                record(json!(3.5), None),
            ]
        );
    }

    #[test]
    fn test_json_payloads_compare_structurally_on_delete() {
        let mut list: LinkedList<Value> = LinkedList::new();
        list.insert_at_end(json!({"id": 1}));
        list.insert_at_end(json!({"id": 2}));

        assert!(list.delete_node(&json!({"id": 2})));
        assert!(!list.delete_node(&json!({"id": 3})));
        assert_eq!(list.snapshot(), vec![record(json!({"id": 1}), None)]);
    }
}
