//! Tests for peg stack discipline and run handling.

use proptest::prelude::*;
use strictly_rings::{Peg, PegId, Ring, RingColor, RingId};

fn color() -> impl Strategy<Value = RingColor> {
    prop_oneof![
        Just(RingColor::Red),
        Just(RingColor::Blue),
        Just(RingColor::Green),
        Just(RingColor::White),
    ]
}

fn peg_with(colors: &[RingColor], capacity: usize) -> Peg {
    let mut peg = Peg::new(PegId(0), capacity);
    for (i, &c) in colors.iter().enumerate() {
        peg.push(Ring::plain(RingId(i as u32), c)).expect("room on peg");
    }
    peg
}

#[test]
fn test_top_run_boundary() {
    use RingColor::*;
    let peg = peg_with(&[Red, Red, Blue, Blue], 4);
    let colors: Vec<_> = peg.top_run().iter().map(Ring::true_color).collect();
    assert_eq!(colors, vec![Blue, Blue]);
    assert_eq!(peg.top_run()[0].id(), RingId(2));
}

#[test]
fn test_sorted_requires_full_capacity() {
    use RingColor::*;
    assert!(Peg::new(PegId(0), 4).is_sorted());
    assert!(!peg_with(&[Red, Red], 4).is_sorted());
    assert!(!peg_with(&[White; 4], 4).is_sorted());
    assert!(peg_with(&[Red; 4], 4).is_sorted());
}

#[test]
fn test_hidden_rings_sort_by_true_color() {
    let mut peg = Peg::new(PegId(0), 3);
    peg.push(Ring::plain(RingId(0), RingColor::Green)).unwrap();
    peg.push(Ring::mystery(RingId(1), RingColor::Green)).unwrap();
    peg.push(Ring::plain(RingId(2), RingColor::Green)).unwrap();
    assert_eq!(peg.top_run_len(), 3);
    assert!(peg.is_sorted());
}

proptest! {
    #[test]
    fn prop_guarded_pushes_never_exceed_capacity(
        capacity in 1usize..6,
        colors in prop::collection::vec(color(), 0..20),
    ) {
        let mut peg = Peg::new(PegId(0), capacity);
        for (i, c) in colors.into_iter().enumerate() {
            let ring = Ring::plain(RingId(i as u32), c);
            if peg.can_accept(&ring) {
                peg.push(ring).unwrap();
            }
            prop_assert!(peg.len() <= peg.capacity());
        }
    }

    #[test]
    fn prop_guarded_run_pushes_never_exceed_capacity(
        capacity in 1usize..6,
        runs in prop::collection::vec((color(), 1usize..4), 0..10),
    ) {
        let mut peg = Peg::new(PegId(0), capacity);
        let mut next = 0u32;
        for (c, len) in runs {
            let run: Vec<Ring> = (0..len)
                .map(|_| {
                    next += 1;
                    Ring::plain(RingId(next), c)
                })
                .collect();
            if peg.can_accept_run(&run) {
                peg.push_run(run).unwrap();
            }
            prop_assert!(peg.len() <= peg.capacity());
        }
    }

    #[test]
    fn prop_pop_then_push_top_run_restores_peg(
        colors in prop::collection::vec(color(), 1..6),
    ) {
        let mut peg = peg_with(&colors, 6);
        let original = peg.clone();
        let run = peg.pop_run(peg.top_run_len()).unwrap();
        peg.push_run(run).unwrap();
        prop_assert_eq!(peg, original);
    }

    #[test]
    fn prop_top_run_is_homogeneous_and_maximal(
        colors in prop::collection::vec(color(), 0..6),
    ) {
        let peg = peg_with(&colors, 6);
        let run = peg.top_run();
        if let Some(top) = peg.top_color() {
            prop_assert!(run.iter().all(|r| r.true_color() == top));
            let below = peg.len() - run.len();
            if below > 0 {
                prop_assert_ne!(peg.rings()[below - 1].true_color(), top);
            }
        } else {
            prop_assert!(run.is_empty());
        }
    }
}
