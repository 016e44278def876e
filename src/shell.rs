//! Line-oriented console driver: collects the setup, then runs the turn loop
//! against a [`GameState`]. Generic over its reader and writer so sessions
//! can be scripted.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::{GameConfig, MIN_PLAYERS};
use crate::error::ShellError;
use crate::game::{roster, GameOutcome, GameState, Player};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Winner(Player),
    Tie,
    /// Input ran out before the game finished.
    Abandoned,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    /// Give back the writer, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Set up a game and play it to the end.
    pub fn run(&mut self, config: &GameConfig) -> Result<GameEnd, ShellError> {
        match self.setup(config)? {
            Some(mut game) => self.play(&mut game),
            None => Ok(GameEnd::Abandoned),
        }
    }

    /// Build a game from `config`, asking for whatever it leaves unset.
    /// Returns `None` if input ends first.
    pub fn setup(&mut self, config: &GameConfig) -> Result<Option<GameState>, ShellError> {
        let names = if config.players.is_empty() {
            match self.ask_names()? {
                Some(names) => names,
                None => return Ok(None),
            }
        } else {
            config.players.clone()
        };

        let mut dimensions = [config.target, config.width, config.height];
        let prompts = [
            "Choose the target length to win: ",
            "Enter the game board width: ",
            "Enter the game board height: ",
        ];
        for (value, prompt) in dimensions.iter_mut().zip(prompts) {
            if value.is_none() {
                *value = self.ask_positive(prompt)?;
                if value.is_none() {
                    return Ok(None);
                }
            }
        }
        let [Some(target), Some(width), Some(height)] = dimensions else {
            return Ok(None);
        };

        let game = GameState::new(width, height, target, names)?
            .with_horizontal_scan(config.horizontal_scan);
        info!(width, height, target, "game started");
        Ok(Some(game))
    }

    /// Run the turn loop until the game ends or input runs out.
    pub fn play(&mut self, game: &mut GameState) -> Result<GameEnd, ShellError> {
        self.print_board(game)?;
        writeln!(self.output)?;

        loop {
            let current = game.current_player().name().to_string();
            let Some(line) = self.prompt(&format!("'{current}' to move\n"))? else {
                info!("input closed mid-game");
                return Ok(GameEnd::Abandoned);
            };

            match line.trim().parse::<usize>() {
                Err(_) => writeln!(self.output, "Please input a number")?,
                Ok(choice) => {
                    let checked = choice
                        .checked_sub(1)
                        .map(|col| game.check_column(col).map(|()| col));
                    match checked {
                        Some(Ok(col)) => {
                            game.play(col);
                            self.print_board(game)?;
                            match game.outcome() {
                                Some(GameOutcome::Draw) => {
                                    writeln!(self.output, "It's a tie!")?;
                                    info!(moves = game.moves_made(), "game tied");
                                    return Ok(GameEnd::Tie);
                                }
                                Some(GameOutcome::Winner(winner)) => {
                                    writeln!(self.output, "{} is the winner!", winner.name())?;
                                    info!(winner = winner.name(), moves = game.moves_made(), "game won");
                                    return Ok(GameEnd::Winner(winner.clone()));
                                }
                                None => {}
                            }
                        }
                        rejected => {
                            debug!(choice, ?rejected, "invalid column");
                            writeln!(self.output, "Choose a valid column")?;
                            self.print_board(game)?;
                        }
                    }
                }
            }
            writeln!(self.output)?;
        }
    }

    fn ask_names(&mut self) -> Result<Option<Vec<String>>, ShellError> {
        loop {
            let mut names = Vec::new();
            loop {
                let number = names.len() + 1;
                let prompt = if names.len() < MIN_PLAYERS {
                    format!("Choose the name for player {number}: ")
                } else {
                    format!("Choose the name for player {number} (blank to start): ")
                };
                let Some(name) = self.prompt(&prompt)? else {
                    return Ok(None);
                };
                let name = name.trim().to_string();
                if name.is_empty() {
                    if names.len() >= MIN_PLAYERS {
                        break;
                    }
                    writeln!(self.output, "Please enter a name")?;
                    continue;
                }
                names.push(name);
            }

            match roster(&names) {
                Ok(_) => return Ok(Some(names)),
                Err(err) => writeln!(self.output, "{err}, please choose again")?,
            }
        }
    }

    fn ask_positive(&mut self, prompt: &str) -> Result<Option<usize>, ShellError> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(value) if value > 0 => return Ok(Some(value)),
                _ => writeln!(self.output, "Please enter a positive integer")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_board(&mut self, game: &GameState) -> Result<(), ShellError> {
        write!(self.output, "{game}")?;
        Ok(())
    }
}
