use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sprlk_core::stats::format_percent;
use sprlk_core::{GameConfig, MoveKind, RoundResolver};

use crate::strategy::{ScriptedPlayer, Strategy};

pub fn run(
    strategy: Strategy,
    gesture: &str,
    rounds: u32,
    seed: u64,
    json: bool,
) -> Result<(), String> {
    let opening = gesture.parse::<MoveKind>().map_err(|e| e.to_string())?;
    if !opening.is_playable() {
        return Err(format!("'{gesture}' is not a playable gesture"));
    }

    let mut resolver = RoundResolver::from_config(&GameConfig::default().with_seed(seed));
    // Offset so the scripted player does not mirror the opponent's stream.
    let mut player = ScriptedPlayer::new(strategy, opening, seed.wrapping_add(1));

    for _ in 0..rounds {
        resolver
            .play_round(player.next_move())
            .map_err(|e| format!("round failed: {e}"))?;
    }
    log::info!("simulated {rounds} rounds with the {strategy} strategy");

    let stats = resolver.current_stats();
    let tally = resolver.predictor().tally();

    if json {
        let value = serde_json::json!({
            "strategy": strategy.to_string(),
            "seed": seed,
            "stats": stats,
            "player_win_percentage": stats.player_win_percentage(),
            "tie_percentage": stats.tie_percentage(),
            "tally": tally
                .iter()
                .map(|(kind, count)| serde_json::json!({ "gesture": kind, "count": count }))
                .collect::<Vec<_>>(),
        });
        let out = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {strategy} {}",
        "Simulation".bold(),
        format!("({rounds} rounds, seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statistic", "Value"]);
    table.add_row(vec!["Games Played".to_string(), stats.rounds.to_string()]);
    table.add_row(vec![
        "Games Computer Won".to_string(),
        stats.opponent_wins.to_string(),
    ]);
    table.add_row(vec![
        "Games Player Won".to_string(),
        stats.player_wins.to_string(),
    ]);
    table.add_row(vec!["Games Tied".to_string(), stats.ties.to_string()]);
    table.add_row(vec![
        "Player Win %".to_string(),
        format_percent(stats.player_win_percentage()),
    ]);
    table.add_row(vec![
        "Tie %".to_string(),
        format_percent(stats.tie_percentage()),
    ]);
    println!("{table}");
    println!();

    println!("  {}", "Gestures Thrown".bold().underline());
    let mut tally_table = Table::new();
    tally_table.set_header(vec!["Gesture", "Count"]);
    for (gesture, count) in tally.iter() {
        tally_table.add_row(vec![gesture.to_string(), count.to_string()]);
    }
    println!("{tally_table}");

    Ok(())
}
