//! poker-hand: a five-card poker hand with on-demand ranking
//!
//! Goals:
//! - A hand never holds more than five cards, and never the same card twice
//! - Cards stay in a deterministic order (ascending after every insertion)
//! - Ranking and draw advice are computed lazily and always match the cards held
//! - Rejections are ordinary outcomes reported as `bool`, not errors
//!
//! ## Quick start: rank a hand
//! ```
//! use poker_hand::cards::{Card, Rank, Suit};
//! use poker_hand::combination::Category;
//! use poker_hand::hand::Hand;
//!
//! let mut hand = Hand::from([
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ]);
//! assert!(hand.add_cards([
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]));
//! assert!(!hand.add_card(Card::new(Rank::Three, Suit::Clubs)));
//!
//! assert_eq!(hand.combination().category(), Category::Pair);
//! assert!(hand.is_pair());
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-hand -- "8c 7c 6c 5c 4c" --against "As Ad Ah Ks Kd"
//! ```

pub mod cards;
pub mod combination;
pub mod draw;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
