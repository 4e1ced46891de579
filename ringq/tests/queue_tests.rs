use ringq::{RingQueue, RingQueueError};

#[test]
fn test_queue_initialization() {
    let queue: RingQueue<i32> = RingQueue::new(4).unwrap();

    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.capacity(), 4);
}

#[test]
fn test_default_capacity() {
    let queue: RingQueue<i32> = RingQueue::with_default_capacity();

    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 4);
}

#[test]
fn test_zero_capacity_rejected() {
    assert_eq!(
        RingQueue::<i32>::new(0).unwrap_err(),
        RingQueueError::InvalidCapacity { capacity: 0 }
    );
}

#[test]
fn test_fifo_order() {
    let mut queue = RingQueue::new(4).unwrap();

    queue.enqueue("first").unwrap();
    queue.enqueue("second").unwrap();
    queue.enqueue("third").unwrap();

    assert_eq!(queue.dequeue(), Some("first"));
    assert_eq!(queue.dequeue(), Some("second"));
    assert_eq!(queue.dequeue(), Some("third"));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_capacity_four_demo_scenario() {
    // enqueue 10, 20, 30, 40 -> full; dequeue -> 10; enqueue 50;
    // dequeue x4 -> 20, 30, 40, 50; further dequeue signals empty
    let mut queue = RingQueue::new(4).unwrap();

    for value in [10, 20, 30, 40] {
        queue.enqueue(value).unwrap();
    }
    assert!(queue.is_full());

    assert_eq!(queue.dequeue(), Some(10));
    let remaining: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(remaining, vec![20, 30, 40]);

    queue.enqueue(50).unwrap();
    let remaining: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(remaining, vec![20, 30, 40, 50]);

    assert_eq!(queue.dequeue(), Some(20));
    assert_eq!(queue.dequeue(), Some(30));
    assert_eq!(queue.dequeue(), Some(40));
    assert_eq!(queue.dequeue(), Some(50));

    assert_eq!(queue.try_dequeue(), Err(RingQueueError::Empty));
}

#[test]
fn test_enqueue_full_leaves_queue_unchanged() {
    let mut queue = RingQueue::new(2).unwrap();

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();

    assert_eq!(
        queue.enqueue(3),
        Err(RingQueueError::Full { capacity: 2 })
    );

    assert_eq!(queue.len(), 2);
    let values: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_peeks_do_not_mutate() {
    let mut queue = RingQueue::new(4).unwrap();

    queue.enqueue(10).unwrap();
    queue.enqueue(20).unwrap();

    assert_eq!(queue.front(), Some(&10));
    assert_eq!(queue.rear(), Some(&20));
    assert_eq!(queue.front(), Some(&10));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_peeks_on_empty_queue() {
    let queue: RingQueue<i32> = RingQueue::new(4).unwrap();

    assert_eq!(queue.front(), None);
    assert_eq!(queue.rear(), None);
    assert_eq!(queue.try_front(), Err(RingQueueError::Empty));
    assert_eq!(queue.try_rear(), Err(RingQueueError::Empty));
}

#[test]
fn test_wraparound_preserves_fifo() {
    let mut queue = RingQueue::new(3).unwrap();

    // Push the cursors past the end of the slot array several times
    queue.enqueue(0).unwrap();
    for round in 1..10 {
        queue.enqueue(round).unwrap();
        assert_eq!(queue.dequeue(), Some(round - 1));
    }
    assert_eq!(queue.dequeue(), Some(9));
    assert!(queue.is_empty());
}

#[test]
fn test_interleaving_keeps_count_in_bounds() {
    let mut queue = RingQueue::new(4).unwrap();

    let steps = [
        true, true, false, true, true, true, false, false, true, true, false, false, false, false,
    ];
    for enqueue in steps {
        if enqueue {
            let _ = queue.enqueue(1);
        } else {
            let _ = queue.dequeue();
        }
        assert!(queue.len() <= queue.capacity());
    }
}

#[test]
fn test_refill_after_draining() {
    let mut queue = RingQueue::new(2).unwrap();

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert!(queue.is_empty());

    // The queue is fully usable again from the empty state
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
}

#[test]
fn test_clear_operation() {
    let mut queue = RingQueue::new(4).unwrap();

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.clear();

    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 4);

    queue.enqueue(9).unwrap();
    assert_eq!(queue.front(), Some(&9));
}

#[test]
fn test_iterator_front_to_rear() {
    let mut queue = RingQueue::new(4).unwrap();

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();
    queue.enqueue(5).unwrap();

    // Iteration follows dequeue order even across the wrap point
    let values: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(values, vec![2, 3, 4, 5]);

    let iter = queue.iter();
    assert_eq!(iter.len(), 4);
}
