use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use blackjack_engine::{EngineError, Phase, RoundSummary, Session};

mod logger;
mod store;
mod ui;

use store::FileStore;

#[derive(Parser)]
#[command(name = "blackjack", about = "Single-deck blackjack at the terminal")]
struct Args {
    /// Directory holding the saved statistics and bankroll
    #[arg(long, default_value = ".blackjack")]
    data_dir: PathBuf,

    /// Seed the shuffle for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text} ");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(buf.trim().to_lowercase()))
}

fn print_settled(session: &Session<FileStore>, summary: &RoundSummary) {
    if let Some(round) = session.round() {
        println!();
        println!("{}", ui::dealer_line(round));
        println!("{}", ui::player_line(round));
    }
    println!("{}", ui::summary_banner(summary));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => {
            debug!("seeding shuffle rng with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = Session::open(FileStore::new(&args.data_dir))?;
    debug!(
        "session opened: balance {} after {} games",
        session.balance(),
        session.stats().games_played
    );

    let rules = *session.rules();
    let mut wager = rules.clamp_wager(100, session.balance());

    println!("Welcome to Black Jack!");
    println!("Get as close to 21 as possible without going over. Beat the dealer to win!");

    loop {
        let table = session
            .round()
            .filter(|r| r.phase() == Phase::PlayerTurn)
            .map(|r| (ui::dealer_line(r), ui::player_line(r)));

        if let Some((dealer, player)) = table {
            println!();
            println!("{dealer}");
            println!("{player}");

            let Some(input) = prompt("[h]it  [s]tand  h[i]nt  [q]uit round >")? else {
                break;
            };
            match input.as_str() {
                "h" | "hit" => {
                    if let Some(summary) = session.hit()? {
                        print_settled(&session, &summary);
                    }
                }
                "s" | "stand" => {
                    let summary = session.stand()?;
                    print_settled(&session, &summary);
                }
                "i" | "hint" => match session.hint() {
                    Some(hint) => println!("Hint: {hint}"),
                    None => println!("Hints are only available on the opening two cards."),
                },
                "q" | "quit" => {
                    session.abandon();
                    println!("Round abandoned.");
                }
                "" => {}
                other => println!("Unknown command: {other}"),
            }
        } else {
            wager = rules.clamp_wager(wager, session.balance());
            println!();
            println!(
                "Balance: ${}   Wager: ${}   (min ${} / max ${})",
                session.balance(),
                wager,
                rules.min_wager,
                rules.max_wager
            );

            let Some(input) = prompt("[d]eal  [+/-] wager  [b]et <n>  [s]tats  [r]ules  [q]uit >")?
            else {
                break;
            };
            let mut parts = input.split_whitespace();
            match parts.next().unwrap_or("") {
                "d" | "deal" => match session.start_round(wager, &mut rng) {
                    Ok(_) => {}
                    Err(e @ EngineError::InvalidWager { .. }) => {
                        warn!("deal rejected: {e}");
                        println!("{e}");
                        if session.balance() < rules.min_wager {
                            println!(
                                "You're out of chips. Delete {} to reset your bankroll.",
                                args.data_dir.display()
                            );
                        }
                    }
                    Err(e) => return Err(e.into()),
                },
                "+" => wager = rules.step_up(wager, session.balance()),
                "-" => wager = rules.step_down(wager),
                "b" | "bet" => match parts.next().and_then(|s| s.parse().ok()) {
                    Some(amount) => {
                        wager = rules.clamp_wager(amount, session.balance());
                        if wager != amount {
                            println!("Wager clamped to ${wager}.");
                        }
                    }
                    None => println!("Usage: bet <amount>"),
                },
                "s" | "stats" => println!("{}", ui::stats_screen(session.stats())),
                "r" | "rules" => println!("{}", ui::rules_screen()),
                "q" | "quit" => break,
                "" => {}
                other => println!("Unknown command: {other}"),
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
