use super::*;

#[test]
fn empty_list_yields_nothing_and_ignores_advance() {
    let mut list: CyclicList<i32> = CyclicList::new();
    assert!(list.current().is_none());
    list.advance();
    assert!(list.current().is_none());
    assert_eq!(list.cursor(), 0);
}

#[test]
fn push_does_not_move_the_cursor() {
    let mut list = CyclicList::new();
    list.push("a");
    list.push("b");
    assert_eq!(list.current(), Some(&"a"));
    list.push("c");
    assert_eq!(list.current(), Some(&"a"));
}

#[test]
fn advance_wraps_after_the_last_element() {
    let mut list = CyclicList::new();
    list.extend(["a", "b", "c"]);
    list.advance();
    assert_eq!(list.current(), Some(&"b"));
    list.advance();
    assert_eq!(list.current(), Some(&"c"));
    list.advance();
    assert_eq!(list.current(), Some(&"a"));
}

#[test]
fn n_advances_return_to_start_for_any_n() {
    for n in 1..8usize {
        let mut list = CyclicList::new();
        list.extend(0..n);
        for _ in 0..n {
            list.advance();
        }
        assert_eq!(list.current(), Some(&0), "length {n}");
        assert_eq!(list.cursor(), 0);
    }
}

#[test]
fn single_element_list_stays_put() {
    let mut list = CyclicList::new();
    list.push(42);
    for _ in 0..5 {
        list.advance();
        assert_eq!(list.current(), Some(&42));
    }
}
