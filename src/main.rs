use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::io::{self, Write};

use snake_arena::game::config::{
    BLOCK_SIZE, DEFAULT_PLAYAREA_HEIGHT, DEFAULT_PLAYAREA_WIDTH, MAX_NUM_AI_SNAKES,
};
use snake_arena::game::GameConfig;
use snake_arena::modes::PlayMode;

#[derive(Parser)]
#[command(name = "snake-arena")]
#[command(version, about = "Grid-based multiplayer snake with computer-controlled rivals")]
struct Cli {
    /// Play area width in pixels, a multiple of 20
    #[arg(value_name = "WIDTH", requires = "height")]
    width: Option<u32>,

    /// Play area height in pixels, a multiple of 20
    #[arg(value_name = "HEIGHT")]
    height: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let width = cli.width.unwrap_or(DEFAULT_PLAYAREA_WIDTH);
    let height = cli.height.unwrap_or(DEFAULT_PLAYAREA_HEIGHT);
    ensure!(
        width > 0 && height > 0 && width % BLOCK_SIZE == 0 && height % BLOCK_SIZE == 0,
        "play area width and height must be positive multiples of {BLOCK_SIZE}"
    );

    // Ask who is playing before taking over the terminal
    let num_players = prompt_num_players()?;
    let num_ai_snakes = prompt_num_ai_snakes()?;

    let config = GameConfig::new(width, height, num_players, num_ai_snakes)?;

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_num_players() -> Result<usize> {
    let line = prompt("Please enter the number of players, [1] or 2: ")?;
    if line.is_empty() {
        return Ok(1);
    }

    let num_players: usize = line
        .parse()
        .context("please enter either 1, 2 or nothing")?;
    ensure!(
        (1..=2).contains(&num_players),
        "please enter either 1, 2 or nothing"
    );
    Ok(num_players)
}

fn prompt_num_ai_snakes() -> Result<usize> {
    let line = prompt(&format!(
        "Please enter the number of AI snakes, [0] or maximum {MAX_NUM_AI_SNAKES}: "
    ))?;
    if line.is_empty() {
        return Ok(0);
    }

    let num_ai_snakes: usize = line
        .parse()
        .with_context(|| format!("please enter a number of AI snakes, 0 .. {MAX_NUM_AI_SNAKES}"))?;
    ensure!(
        num_ai_snakes <= MAX_NUM_AI_SNAKES,
        "please enter a number of AI snakes, 0 .. {MAX_NUM_AI_SNAKES}"
    );
    Ok(num_ai_snakes)
}
