use poker_hand::cards::Rank;
use poker_hand::hand::Hand;
use std::cmp::Ordering;

fn hand(text: &str) -> Hand {
    text.parse().expect("valid hand")
}

#[test]
fn pair_beats_lower_pair() {
    let ord = hand("Ks Kh 9d 4s 2h").compare(&hand("Qc Qh Ac 9s 6c"));
    assert!(ord.is_gt(), "Higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let a = hand("Ks Kc Ad 9d 4s");
    let b = hand("Kh Kd Qd 9c 4h");
    assert!(a.compare(&b).is_gt(), "Pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    assert!(hand("Ks Kc 9c 9d 2h").compare(&hand("Kh Kd 8s 8h Ac")).is_gt());
    assert!(hand("Ks Kc 9c 9d 3h").compare(&hand("Kh Kd 9s 9h 2c")).is_gt());
}

#[test]
fn trips_order_by_trip_rank() {
    assert!(hand("Qc Qd Qh 2s 3d").compare(&hand("Jc Jd Jh As Kd")).is_gt());
}

#[test]
fn flush_beats_straight_and_full_house_beats_flush() {
    let straight = hand("9c Td Jh Qs Kc");
    let flush = hand("2h 5h 7h 9h Jh");
    let boat = hand("2c 2d 2s 3c 3d");
    assert!(flush.compare(&straight).is_gt());
    assert!(boat.compare(&flush).is_gt());
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let wheel = hand("Ac 2d 3h 4s 5c");
    let six_high = hand("2c 3d 4h 5s 6c");
    assert_eq!(wheel.combination().highest_card(), Some(Rank::Five));
    assert_eq!(wheel.compare(&six_high), Ordering::Less);
}

#[test]
fn same_ranks_in_other_suits_tie() {
    let a = hand("As Kd 9h 7c 3c");
    let b = hand("Ah Kc 9s 7d 3s");
    assert_eq!(a.compare(&b), Ordering::Equal);
    assert_eq!(b.compare(&a), Ordering::Equal);
}

#[test]
fn quads_kicker_decides() {
    assert!(hand("7c 7d 7h 7s Ac").compare(&hand("7c 7d 7h 7s Kc")).is_gt());
}

#[test]
fn tiebreak_lists_deciding_ranks_in_order() {
    let two_pair = hand("2h Ks 9c Kc 9d");
    assert_eq!(two_pair.combination().tiebreak(), &[Rank::King, Rank::Nine, Rank::Two]);

    let boat = hand("3c 3d Jh Js 3s");
    assert_eq!(boat.combination().tiebreak(), &[Rank::Three, Rank::Jack]);

    let wheel = hand("Ac 2d 3h 4s 5c");
    assert_eq!(wheel.combination().tiebreak(), &[Rank::Five]);
}

#[test]
fn packed_value_agrees_with_compare() {
    let hands = [
        hand("Ah Kd 7s 5c 2d"),
        hand("Ks Kc Ad 9d 4s"),
        hand("Kh Kd Qd 9c 4h"),
        hand("Ks Kc 9c 9d 2h"),
        hand("Ac 2d 3h 4s 5c"),
        hand("2h 5h 7h 9h Jh"),
    ];
    for a in &hands {
        for b in &hands {
            let by_value = a.combination().value().cmp(&b.combination().value());
            assert_eq!(by_value, a.compare(b), "{a} vs {b}");
            assert_eq!(a.combination().value().raw().cmp(&b.combination().value().raw()), by_value);
        }
    }
}
