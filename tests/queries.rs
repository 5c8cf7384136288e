use std::cmp::Ordering;

use interval_skiplist::{Comparator, IntervalError, IntervalSkiplist};


fn sorted<M: Ord>(mut markers: Vec<M>) -> Vec<M> {
    markers.sort();
    markers
}

fn int_list() -> IntervalSkiplist<i32, char> {
    IntervalSkiplist::new(i32::MIN, i32::MAX)
}


// ================================
//  Stabbing queries
// ================================

#[test]
fn stabbing_hits_exactly_the_covering_intervals() {
    let mut list = int_list();

    list.insert('a', 2, 7).unwrap();
    list.insert('b', 1, 5).unwrap();
    list.insert('c', 8, 8).unwrap();

    assert_eq!(list.find_containing(&[1]), vec!['b']);
    assert_eq!(list.find_containing(&[2]), vec!['b', 'a']);
    assert_eq!(list.find_containing(&[8]), vec!['c']);
    assert_eq!(list.find_containing(&[0]), Vec::<char>::new());
    assert_eq!(list.find_containing(&[9]), Vec::<char>::new());

    list.remove(&'b');

    assert_eq!(list.find_containing(&[2]), vec!['a']);
    assert_eq!(list.find_containing(&[1]), Vec::<char>::new());
}

#[test]
fn stabbing_includes_closed_endpoints() {
    let mut list = int_list();
    list.insert('a', 3, 9).unwrap();

    assert_eq!(list.find_containing(&[3]), vec!['a']);
    assert_eq!(list.find_containing(&[6]), vec!['a']);
    assert_eq!(list.find_containing(&[9]), vec!['a']);
    assert!(list.find_containing(&[2]).is_empty());
    assert!(list.find_containing(&[10]).is_empty());
}

#[test]
fn multi_point_stabbing_is_the_endpoint_intersection() {
    let mut list = int_list();

    list.insert('a', 0, 10).unwrap();
    list.insert('b', 4, 6).unwrap();
    list.insert('c', 5, 20).unwrap();

    // An interval contains every point iff it contains the smallest and the
    // largest; points are accepted in any order.
    assert_eq!(sorted(list.find_containing(&[5, 6])), vec!['a', 'b', 'c']);
    assert_eq!(sorted(list.find_containing(&[6, 5])), vec!['a', 'b', 'c']);
    assert_eq!(sorted(list.find_containing(&[4, 10])), vec!['a']);
    assert_eq!(sorted(list.find_containing(&[5, 6, 8])), vec!['a', 'c']);
    assert!(list.find_containing(&[4, 20]).is_empty());
    assert!(list.find_containing(&[]).is_empty());
}

#[test]
fn zero_length_intervals_are_stabbed_only_at_their_index() {
    let mut list = int_list();
    list.insert('z', 4, 4).unwrap();

    assert_eq!(list.find_containing(&[4]), vec!['z']);
    assert!(list.find_containing(&[3]).is_empty());
    assert!(list.find_containing(&[5]).is_empty());

    list.remove(&'z');
    assert!(list.find_containing(&[4]).is_empty());
    assert!(list.is_empty());
}

// ================================
//  First / last endpoint queries
// ================================

#[test]
fn first_after_min_returns_the_starting_set_of_the_lowest_node() {
    let mut list: IntervalSkiplist<i32, u32> = IntervalSkiplist::new(i32::MIN, i32::MAX);

    list.insert(0, 1, 3).unwrap();
    list.insert(1, 3, 5).unwrap();
    list.insert(2, 5, 7).unwrap();
    list.insert(3, 1, 5).unwrap();

    assert_eq!(list.find_first_after_min(), vec![0, 3]);
}

#[test]
fn last_before_max_returns_the_ending_set_of_the_highest_node() {
    let mut list: IntervalSkiplist<i32, u32> = IntervalSkiplist::new(i32::MIN, i32::MAX);

    list.insert(0, 1, 7).unwrap();
    list.insert(1, 3, 5).unwrap();
    list.insert(2, 5, 7).unwrap();
    list.insert(3, 1, 5).unwrap();

    assert_eq!(list.find_last_before_max(), vec![0, 2]);
}

#[test]
fn first_and_last_are_empty_on_an_empty_list() {
    let list = int_list();

    assert!(list.find_first_after_min().is_empty());
    assert!(list.find_last_before_max().is_empty());
}

// ================================
//  Range queries
// ================================

#[test]
fn intersecting_matches_the_overlap_predicate() {
    let mut list = int_list();

    list.insert('a', 0, 4).unwrap();
    list.insert('b', 3, 8).unwrap();
    list.insert('c', 7, 12).unwrap();
    list.insert('d', 20, 25).unwrap();

    assert_eq!(sorted(list.find_intersecting(&2, &7)), vec!['a', 'b', 'c']);
    assert_eq!(sorted(list.find_intersecting(&4, &4)), vec!['a', 'b']);
    assert_eq!(sorted(list.find_intersecting(&9, &19)), vec!['c']);
    assert_eq!(sorted(list.find_intersecting(&13, &19)), Vec::<char>::new());
    assert_eq!(sorted(list.find_intersecting(&-5, &100)), vec!['a', 'b', 'c', 'd']);
}

#[test]
fn starting_and_ending_queries_are_exact() {
    let mut list = int_list();

    list.insert('a', 1, 5).unwrap();
    list.insert('b', 1, 9).unwrap();
    list.insert('c', 5, 9).unwrap();

    assert_eq!(list.find_starting_at(&1), vec!['a', 'b']);
    assert_eq!(list.find_starting_at(&5), vec!['c']);
    assert!(list.find_starting_at(&9).is_empty());
    assert!(list.find_starting_at(&2).is_empty());

    assert_eq!(list.find_ending_at(&5), vec!['a']);
    assert_eq!(list.find_ending_at(&9), vec!['b', 'c']);
    assert!(list.find_ending_at(&1).is_empty());

    // Range forms walk the occupied indices in order.
    assert_eq!(list.find_starting_in(&0, &5), vec!['a', 'b', 'c']);
    assert_eq!(list.find_starting_in(&2, &5), vec!['c']);
    assert!(list.find_starting_in(&2, &4).is_empty());
    assert_eq!(list.find_ending_in(&5, &9), vec!['a', 'b', 'c']);
    assert_eq!(list.find_ending_in(&6, &20), vec!['b', 'c']);
}

#[test]
fn contained_in_requires_both_endpoints_inside() {
    let mut list = int_list();

    list.insert('a', 2, 4).unwrap();
    list.insert('b', 3, 9).unwrap();
    list.insert('c', 5, 6).unwrap();
    list.insert('d', 7, 7).unwrap();

    assert_eq!(list.find_contained_in(&2, &9), vec!['a', 'c', 'd', 'b']);
    assert_eq!(list.find_contained_in(&2, &6), vec!['a', 'c']);
    assert_eq!(list.find_contained_in(&5, &8), vec!['c', 'd']);
    assert_eq!(list.find_contained_in(&7, &7), vec!['d']);
    assert!(list.find_contained_in(&3, &4).is_empty());
}

// ================================
//  Custom comparator
// ================================

/// Lexicographic order on pairs, with sentinel pairs standing in for the
/// infinities.
#[derive(Debug, Default, Clone, Copy)]
struct PairComparator;

impl Comparator<(i32, i32)> for PairComparator {
    fn cmp(&self, lhs: &(i32, i32), rhs: &(i32, i32)) -> Ordering {
        lhs.0.cmp(&rhs.0).then_with(|| lhs.1.cmp(&rhs.1))
    }
}

#[test]
fn lexicographic_pairs_behave_like_any_other_index() {
    let mut list = IntervalSkiplist::with_comparator(
        PairComparator,
        (i32::MIN, i32::MIN),
        (i32::MAX, i32::MAX),
    );

    list.insert('a', (1, 2), (3, 4)).unwrap();
    list.insert('b', (2, 1), (3, 10)).unwrap();

    assert_eq!(list.find_containing(&[(1, i32::MAX)]), vec!['a']);
    assert_eq!(sorted(list.find_containing(&[(2, 20)])), vec!['a', 'b']);
    assert!(list.find_containing(&[(3, 11)]).is_empty());
    assert_eq!(list.find_ending_at(&(3, 4)), vec!['a']);

    list.verify_marker_invariant().unwrap();
}

// ================================
//  Mutation semantics
// ================================

#[test]
fn insert_validates_its_arguments() {
    let mut list = int_list();

    list.insert('a', 1, 5).unwrap();

    assert_eq!(list.insert('a', 2, 3), Err(IntervalError::DuplicateMarker));
    assert_eq!(list.insert('b', 5, 1), Err(IntervalError::ReversedEndpoints));
    assert_eq!(
        list.insert('b', i32::MIN, 3),
        Err(IntervalError::EndpointOutOfBounds),
    );
    assert_eq!(
        list.insert('b', 3, i32::MAX),
        Err(IntervalError::EndpointOutOfBounds),
    );
    assert!(list.insert('a', 2, 3).unwrap_err().is_invalid_argument());

    // The failed calls left the list untouched.
    assert_eq!(list.len(), 1);
    assert_eq!(list.find_containing(&[3]), vec!['a']);
    list.verify_marker_invariant().unwrap();
}

#[test]
fn removing_an_unknown_marker_is_silent() {
    let mut list = int_list();
    list.insert('a', 1, 5).unwrap();

    list.remove(&'x');

    assert_eq!(list.len(), 1);
    assert_eq!(list.find_containing(&[2]), vec!['a']);
}

#[test]
fn shared_endpoint_nodes_survive_until_the_last_marker_leaves() {
    let mut list = int_list();

    list.insert('a', 1, 5).unwrap();
    list.insert('b', 5, 9).unwrap();

    list.remove(&'a');
    list.verify_marker_invariant().unwrap();

    // The node at 5 must still serve as b's start.
    assert_eq!(list.find_containing(&[5]), vec!['b']);
    assert_eq!(list.find_starting_at(&5), vec!['b']);

    list.remove(&'b');
    list.verify_marker_invariant().unwrap();
    assert!(list.is_empty());
    assert!(list.find_containing(&[5]).is_empty());
}

#[test]
fn update_moves_an_interval_and_is_idempotent() {
    let mut list = int_list();

    list.insert('a', 1, 5).unwrap();
    list.update('a', 10, 20).unwrap();

    assert!(list.find_containing(&[3]).is_empty());
    assert_eq!(list.find_containing(&[15]), vec!['a']);

    // Updating to the same interval again changes nothing observable.
    list.update('a', 10, 20).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.find_containing(&[15]), vec!['a']);
    assert_eq!(list.find_starting_at(&10), vec!['a']);
    list.verify_marker_invariant().unwrap();

    // An unknown marker is simply inserted.
    list.update('b', 12, 14).unwrap();
    assert_eq!(sorted(list.find_containing(&[13])), vec!['a', 'b']);
}

#[test]
fn failed_update_leaves_the_previous_interval_in_place() {
    let mut list = int_list();
    list.insert('a', 1, 5).unwrap();

    assert_eq!(list.update('a', 9, 2), Err(IntervalError::ReversedEndpoints));

    assert_eq!(list.find_containing(&[3]), vec!['a']);
    assert_eq!(list.interval(&'a').map(|iv| (*iv.start(), *iv.end())), Some((1, 5)));
    list.verify_marker_invariant().unwrap();
}

#[test]
fn directory_view_tracks_the_stored_intervals() {
    let mut list = int_list();

    list.insert('a', 1, 5).unwrap();
    list.insert('b', 2, 2).unwrap();

    assert_eq!(list.len(), 2);
    assert!(list.contains_marker(&'a'));
    assert!(!list.contains_marker(&'z'));

    let view = list.intervals_by_marker();
    assert_eq!(view.len(), 2);
    assert_eq!(view[&'a'].start(), &1);
    assert_eq!(view[&'a'].end(), &5);
    assert_eq!(view[&'b'].start(), &2);

    list.remove(&'a');
    assert_eq!(list.len(), 1);
    assert!(list.interval(&'a').is_none());
}

#[test]
fn clear_empties_every_query_surface() {
    let mut list: IntervalSkiplist<i32, u32> =
        IntervalSkiplist::new_seeded(i32::MIN, i32::MAX, 0x_C1EA_4);
    let mut prng = oorandom::Rand32::new(99);

    for marker in 0..100 {
        let start = prng.rand_range(0..100) as i32;
        let end = start + prng.rand_range(0..(100 - start as u32)) as i32;
        list.insert(marker, start, end).unwrap();
    }

    list.clear();

    assert!(list.is_empty());
    assert!(list.intervals_by_marker().is_empty());
    assert!(list.find_contained_in(&0, &100).is_empty());
    assert!(list.find_containing(&[50]).is_empty());
    assert!(list.find_intersecting(&0, &100).is_empty());
    assert!(list.find_first_after_min().is_empty());
    assert!(list.find_last_before_max().is_empty());
    list.verify_marker_invariant().unwrap();

    // The list remains usable after clearing.
    list.insert(7, 10, 12).unwrap();
    assert_eq!(list.find_containing(&[11]), vec![7]);
    list.verify_marker_invariant().unwrap();
}
