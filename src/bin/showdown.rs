use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, error, info};
use poker_showdown::deck::Deck;
use poker_showdown::evaluator::EvaluatedHand;
use poker_showdown::hand::Hand;
use poker_showdown::showdown::winners;

#[derive(Debug, Parser)]
#[clap(version, about = "Compare five-card poker hands and print the winners.")]
struct Cli {
    /// Hands as comma separated cards, e.g. "10H,JH,QH,KH,AH".
    hands: Vec<String>,
    /// Deal this many random hands from one shuffled deck.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(1..=10))]
    deal: Option<u8>,
    /// Seed for the dealt hands.
    #[clap(long, short, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut hands = Vec::with_capacity(cli.hands.len());
    for token in &cli.hands {
        match token.parse::<Hand>() {
            Ok(hand) => hands.push(hand),
            Err(e) => {
                error!("{token}: {e}");
                bail!("malformed hand '{token}'");
            }
        }
    }

    if let Some(n) = cli.deal {
        let mut deck = Deck::shuffled(cli.seed);
        hands.extend(std::iter::from_fn(|| deck.deal_hand()).take(n as usize));
        info!("dealt {n} hands with seed {}", cli.seed);
    }

    for hand in &hands {
        let evaluated = EvaluatedHand::new(hand.clone());
        debug!("{hand}: {:?}", evaluated.classification());
        println!("{:<24} {}", hand, evaluated.category());
    }

    for hand in winners(&hands)? {
        println!("winner: {hand}");
    }

    Ok(())
}
