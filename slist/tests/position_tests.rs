use slist::{SList, SListError};

#[test]
fn test_insert_at_head_and_tail_positions() {
    let mut list: SList<i32> = [2].into_iter().collect();

    list.insert_at(0, 1).unwrap();
    list.insert_at(2, 3).unwrap();

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_insert_at_middle_preserves_remainder() {
    let mut list: SList<i32> = [1, 2, 4, 5].into_iter().collect();

    list.insert_at(2, 3).unwrap();

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_at_out_of_range_fails() {
    let mut list: SList<i32> = [1, 2].into_iter().collect();

    assert_eq!(
        list.insert_at(3, 9),
        Err(SListError::PositionOutOfRange { position: 3, len: 2 })
    );

    // List unchanged after the failed insert
    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_insert_into_empty_list() {
    let mut list: SList<i32> = SList::new();

    list.insert_at(0, 1).unwrap();
    assert_eq!(list.front(), Some(&1));

    assert!(list.insert_at(2, 9).is_err());
}

#[test]
fn test_positional_insert_demo_scenario() {
    // Start from [10, 20]: append 30, prepend 100 then 50, append 200,
    // then insert 80 at position 2
    let mut list: SList<i32> = [10, 20].into_iter().collect();

    list.push_back(30);
    list.push_front(100);
    list.push_front(50);
    list.push_back(200);
    list.insert_at(2, 80).unwrap();

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![50, 100, 80, 10, 20, 30, 200]);
    assert_eq!(list.len(), 7);
}

#[test]
fn test_remove_at_head() {
    let mut list: SList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.remove_at(0), Ok(1));

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![2, 3]);
}

#[test]
fn test_remove_at_middle_relinks_chain() {
    let mut list: SList<i32> = [1, 2, 3, 4].into_iter().collect();

    assert_eq!(list.remove_at(2), Ok(3));

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 4]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_at_tail() {
    let mut list: SList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.remove_at(2), Ok(3));
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn test_remove_at_out_of_range_fails() {
    let mut list: SList<i32> = [1, 2].into_iter().collect();

    // Position len() is one past the last element
    assert_eq!(
        list.remove_at(2),
        Err(SListError::PositionOutOfRange { position: 2, len: 2 })
    );

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_remove_from_empty_list_fails() {
    let mut list: SList<i32> = SList::new();

    assert_eq!(
        list.remove_at(0),
        Err(SListError::PositionOutOfRange { position: 0, len: 0 })
    );
}

#[test]
fn test_insert_then_remove_round_trip() {
    let mut list: SList<i32> = [1, 2, 3].into_iter().collect();

    list.insert_at(1, 9).unwrap();
    assert_eq!(list.remove_at(1), Ok(9));

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
}
