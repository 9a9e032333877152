//! robodice table binary
//!
//! Seats automated players (and optionally one person) at a table and plays
//! a number of games, printing standings after each.

use clap::Parser;
use colored::*;
use dialoguer::MultiSelect;
use dialoguer::Select;
use robodice::agents::AgentKind;
use robodice::game::Standing;
use robodice::game::Table;
use robodice::scoring::Category;
use robodice::scoring::score;
use robodice::*;

#[derive(Debug, Parser)]
#[command(name = "robodice", about = "Five dice, thirteen categories, a table of bots.")]
struct Args {
    /// Automated seats, in turn order.
    #[arg(short, long, value_delimiter = ',', default_value = "four-and-up,of-a-kinder,upper-half,random")]
    bots: Vec<AgentKind>,
    /// Take the first seat yourself under this name.
    #[arg(long)]
    human: Option<String>,
    /// Games to play back to back.
    #[arg(short, long, default_value_t = 1)]
    games: usize,
    /// Play speed in percent; 100 plays instantly.
    #[arg(short, long, env = "ROBODICE_SPEED", default_value_t = 50)]
    speed: u32,
    /// Seed the dice and random players.
    #[arg(long)]
    seed: Option<u64>,
    /// Print final standings as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let table = seat(&args)?;
    log::info!(
        "[main] {} at the table, think time {:?}",
        table.order().join(", "),
        table.think_time()
    );
    for game in 1..=args.games {
        table.new_game().await?;
        if args.human.is_some() {
            drive(&table).await?;
        }
        table
            .settled()
            .await
            .map_err(|fault| anyhow::anyhow!("game {} stalled: {}", game, fault))?;
        report(game, &table.standings());
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.standings())?);
    }
    Ok(())
}

fn seat(args: &Args) -> anyhow::Result<Table> {
    let table = args.seed.map(Table::seeded).unwrap_or_default();
    if let Some(ref name) = args.human {
        table.add_player(name, AgentKind::Human)?;
    }
    if args.bots.contains(&AgentKind::Human) {
        anyhow::bail!("--bots only takes automated players; sit down yourself with --human <name>");
    }
    for (i, kind) in args.bots.iter().enumerate() {
        let name = format!("{}-{}", kind.name().to_lowercase().replace(' ', "-"), i + 1);
        match args.seed {
            Some(seed) => table.seat(&name, kind.seeded(seed.wrapping_add(i as u64)))?,
            None => table.add_player(&name, *kind)?,
        }
    }
    table.set_play_speed(args.speed);
    Ok(table)
}

/// Prompt the person whenever it is their turn, until the game ends.
async fn drive(table: &Table) -> anyhow::Result<()> {
    while let Some(name) = table.await_manual().await {
        println!("{}", format!("{}'s turn", name).bold());
        table.roll()?;
        while table.rolls_left() > 0 {
            println!("{}", dice(table));
            match Select::new()
                .items(&["roll again", "hold dice", "score"])
                .default(0)
                .interact()?
            {
                0 => {
                    table.roll()?;
                }
                1 => hold(table)?,
                _ => break,
            }
        }
        println!("{}", dice(table));
        let category = choose(table)?;
        let points = table.score_current(category).await?;
        println!("{} scores {} in {}", name, points.to_string().green(), category);
    }
    Ok(())
}

fn hold(table: &Table) -> anyhow::Result<()> {
    let faces = table.current_roll().faces().map(|f| f.to_string());
    let held = table.holds();
    let chosen = MultiSelect::new()
        .with_prompt("hold which dice")
        .items(&faces)
        .defaults(&held)
        .interact()?;
    for index in 0..DICE {
        if held[index] != chosen.contains(&index) {
            table.toggle_hold(index)?;
        }
    }
    Ok(())
}

fn choose(table: &Table) -> anyhow::Result<Category> {
    let roll = table.current_roll();
    let open = table.open_categories()?;
    let labels = open
        .iter()
        .map(|&c| format!("{:<16}{:>4}", c, score(c, &roll)))
        .collect::<Vec<_>>();
    let choice = Select::new()
        .with_prompt("score in")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(open[choice])
}

fn dice(table: &Table) -> String {
    table
        .current_roll()
        .faces()
        .iter()
        .zip(table.holds())
        .map(|(face, held)| match held {
            true => format!("[{}]", face).green().to_string(),
            false => format!(" {} ", face),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn report(game: usize, standings: &[Standing]) {
    println!("{}", format!("game {}", game).bold());
    for (i, standing) in standings.iter().enumerate() {
        match i {
            0 => println!("{}", standing.to_string().yellow()),
            _ => println!("{}", standing),
        }
    }
}
