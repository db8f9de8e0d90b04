use blackjack_engine::{MemoryStore, Outcome, Session, TableRules};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(
    name = "bj-sim",
    about = "Play seeded blackjack rounds under a fixed policy and report outcome rates"
)]
struct Args {
    /// Number of rounds to play
    #[arg(long, default_value = "10000")]
    rounds: u32,

    /// RNG seed for a reproducible run
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Flat wager per round (clamped to the table and bankroll)
    #[arg(long, default_value = "100")]
    wager: u32,

    /// Player keeps hitting below this total
    #[arg(long, default_value = "17")]
    draw_until: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rules = TableRules::default();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut session = Session::open(MemoryStore::default())?;

    eprintln!("Configuration:");
    eprintln!("  Rounds:     {}", args.rounds);
    eprintln!("  Seed:       {}", args.seed);
    eprintln!("  Wager:      {}", args.wager);
    eprintln!("  Draw until: {}", args.draw_until);

    let mut player_busts = 0u32;
    let mut dealer_busts = 0u32;
    let mut player_wins = 0u32;
    let mut dealer_wins = 0u32;
    let mut pushes = 0u32;
    let mut rebuys = 0u32;

    for _ in 0..args.rounds {
        // A drained bankroll ends the session; rebuy with a fresh one.
        if session.balance() < rules.min_wager {
            session = Session::open(MemoryStore::default())?;
            rebuys += 1;
        }

        let wager = rules.clamp_wager(args.wager, session.balance());
        session.start_round(wager, &mut rng)?;

        let summary = loop {
            let total = match session.round() {
                Some(round) => round.player().total(),
                None => break session.stand()?,
            };
            if total < args.draw_until {
                match session.hit()? {
                    Some(summary) => break summary,
                    None => continue,
                }
            } else {
                break session.stand()?;
            }
        };

        match summary.outcome {
            Outcome::PlayerBust => player_busts += 1,
            Outcome::DealerBust => dealer_busts += 1,
            Outcome::PlayerWin => player_wins += 1,
            Outcome::DealerWin => dealer_wins += 1,
            Outcome::Push => pushes += 1,
        }
    }

    let total = f64::from(args.rounds);
    let pct = |n: u32| f64::from(n) * 100.0 / total;

    println!("Rounds:       {}", args.rounds);
    println!("Player bust:  {:>6} ({:.2}%)", player_busts, pct(player_busts));
    println!("Dealer bust:  {:>6} ({:.2}%)", dealer_busts, pct(dealer_busts));
    println!("Player win:   {:>6} ({:.2}%)", player_wins, pct(player_wins));
    println!("Dealer win:   {:>6} ({:.2}%)", dealer_wins, pct(dealer_wins));
    println!("Push:         {:>6} ({:.2}%)", pushes, pct(pushes));
    println!("Rebuys:       {rebuys}");
    println!(
        "Win rate:     {:.2}% (wins + dealer busts)",
        pct(player_wins + dealer_busts)
    );

    Ok(())
}
