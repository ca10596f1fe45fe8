use anyhow::{Context, Result};
use clap::Parser;
use poker_hand::draw::DrawKind;
use poker_hand::hand::{Hand, SortOrder};
use std::cmp::Ordering;

/// Rank a five-card poker hand and print draw advice.
#[derive(Debug, Parser)]
#[command(version = poker_hand::VERSION, about)]
struct Cli {
    /// Cards separated by spaces or commas, e.g. "As Kd 10c"; only the first five count
    cards: String,

    /// Another hand to compare against
    #[arg(long)]
    against: Option<String>,

    /// Order used to print the cards: asc or desc
    #[arg(long, default_value = "asc")]
    order: SortOrder,
}

fn describe(label: &str, hand: &Hand) -> String {
    let combination = hand.combination();
    let highest = combination.highest_card().map(|r| r.to_string()).unwrap_or_else(|| "-".into());
    let royal = if hand.is_royal_flush() { " (royal)" } else { "" };
    let mut out = format!("{label:<8}{hand}\n");
    out += &format!("{:<8}{}{royal}, led by {highest}\n", "", combination.category().label());

    let draw = hand.draw_combination();
    match draw.kind() {
        DrawKind::Made => out += &format!("{:<8}stand pat\n", ""),
        kind => {
            let discard: Vec<String> = draw.discard().iter().map(|c| c.to_string()).collect();
            out += &format!(
                "{:<8}draw {kind:?} with {} outs, discard [{}]\n",
                "",
                draw.outs(),
                discard.join(" ")
            );
        }
    }
    out
}

fn verdict(hand: &Hand, other: &Hand) -> &'static str {
    match hand.compare(other) {
        Ordering::Greater => "hand wins",
        Ordering::Less => "against wins",
        Ordering::Equal => "tie",
    }
}

fn parse_hand(text: &str, order: SortOrder) -> Result<Hand> {
    let mut hand: Hand = text.parse().with_context(|| format!("parsing hand '{text}'"))?;
    hand.sort(order);
    Ok(hand)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let hand = parse_hand(&cli.cards, cli.order)?;
    print!("{}", describe("hand", &hand));

    if let Some(text) = cli.against.as_deref() {
        let other = parse_hand(text, cli.order)?;
        print!("{}", describe("against", &other));
        println!("{}", verdict(&hand, &other));
    }
    Ok(())
}
