use std::io::{self, BufRead, Write};

use colored::Colorize;

use sprlk_core::{GameConfig, RoundOutcome, RoundResolver, SprlkError, Verdict};

const HELP: &str = "Commands:
  <gesture>   throw scissors, paper, rock, lizard or spock (s, p, r, l, k)
  stats       show the statistics so far
  rules       show the rules guide
  help        show this help
  quit        end the game and show the final statistics";

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = match seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    };
    let mut resolver = RoundResolver::from_config(&config);

    println!("  {} Scissors, Paper, Rock, Lizard, Spock", "Starting".bold());
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Type a gesture to play, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" => break,
            "help" => println!("{HELP}\n"),
            "rules" => println!("{}\n", sprlk_core::rules_guide()),
            "stats" => println!("{}\n", resolver.formatted_summary()),
            _ => {
                match super::parse_selection(input).and_then(|m| resolver.play_round(m)) {
                    Ok(outcome) => println!("{}\n", render_round(&outcome)),
                    Err(SprlkError::InvalidMove(_)) => {
                        println!("{}\n", "select a gesture before playing".yellow());
                    }
                    Err(e) => println!("{}\n", e.to_string().yellow()),
                }
            }
        }
    }

    println!("\n{}", resolver.formatted_summary());
    Ok(())
}

fn render_round(outcome: &RoundOutcome) -> String {
    let status = match outcome.verdict {
        Verdict::PlayerWin => outcome.status().green().bold(),
        Verdict::OpponentWin => outcome.status().red().bold(),
        Verdict::Tie => outcome.status().yellow().bold(),
    };
    format!(
        "  Round {}\n  Player Gesture: {}\n  Computer Gesture: {}\n  {}\n  Game Status: {}",
        outcome.round,
        outcome.human,
        outcome.opponent,
        outcome.describe().dimmed(),
        status,
    )
}
