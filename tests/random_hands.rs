use poker_hand::cards::Card;
use poker_hand::combination::Category;
use poker_hand::draw::DrawKind;
use poker_hand::hand::Hand;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn deal(rng: &mut ChaCha8Rng, deck: &mut [Card], n: usize) -> Hand {
    deck.shuffle(rng);
    Hand::from_cards(deck[..n].iter().copied())
}

#[test]
fn seeded_deals_follow_the_usual_category_frequencies() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck: Vec<Card> = Card::all().collect();
    let mut counts = [0usize; Category::ALL.len()];
    for _ in 0..2000 {
        let hand = deal(&mut rng, &mut deck, 5);
        assert_eq!(hand.len(), 5);
        counts[hand.combination().category().ordinal() as usize] += 1;
    }
    let high_card = counts[Category::HighCard.ordinal() as usize];
    let pair = counts[Category::Pair.ordinal() as usize];
    let two_pair = counts[Category::TwoPair.ordinal() as usize];
    assert!(high_card > pair, "{counts:?}");
    assert!(pair > two_pair, "{counts:?}");
    assert_eq!(counts.iter().sum::<usize>(), 2000);
    for category in Category::ALL.into_iter().filter(|c| *c < Category::Straight) {
        assert!(counts[category.ordinal() as usize] > 0, "no {} in {counts:?}", category.label());
    }
}

#[test]
fn seeded_deals_give_consistent_draw_advice() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck: Vec<Card> = Card::all().collect();
    for _ in 0..200 {
        let hand = deal(&mut rng, &mut deck, 5);
        let draw = hand.draw_combination();
        assert_eq!(draw.keep().len() + draw.discard().len(), hand.len());
        assert!(draw.keep().iter().all(|c| hand.has(*c)));
        match draw.kind() {
            DrawKind::Made => assert!(hand.combination().category() >= Category::Straight),
            DrawKind::Nothing => assert_eq!(draw.outs(), 0),
            _ => {
                assert_eq!(draw.keep().len(), 4);
                assert!(draw.outs() > 0);
            }
        }
    }
}
