//! The engine: owns one game and answers protocol commands.

use crate::command::CommandKind;
use crate::config::{ConfigError, EngineConfig};
use crate::error::CommandError;
use crate::generator::{MoveGenerator, RandomMoveGenerator};
use crate::protocol::{Request, Response};
use connect6_rules::{Game, Stone, Vertex};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// GTP protocol version reported by `protocol_version`.
pub const PROTOCOL_VERSION: &str = "2";

/// Game name reported by `gogui-rules_game_id`.
pub const GAME_ID: &str = "Connect6";

/// Connect6 engine state and command dispatcher.
///
/// One instance plays one game at a time. Commands are handled strictly in
/// order, each producing exactly one reply.
#[derive(Debug)]
pub struct Engine<G = RandomMoveGenerator> {
    game: Game,
    komi: f64,
    running: bool,
    name: String,
    version: String,
    generator: G,
}

impl Engine<RandomMoveGenerator> {
    /// Creates an engine from configuration. `genmove` is seeded from the
    /// configured seed, or from the OS when none is set.
    #[instrument(skip(config))]
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let generator = match config.seed() {
            Some(seed) => RandomMoveGenerator::seeded(*seed),
            None => RandomMoveGenerator::from_os_rng(),
        };
        Self::with_generator(config, generator)
    }
}

impl<G: MoveGenerator> Engine<G> {
    /// Creates an engine with an explicit move generator.
    #[instrument(skip(config, generator))]
    pub fn with_generator(config: &EngineConfig, generator: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let game = Game::new(*config.board_size())
            .map_err(|e| ConfigError::new(format!("Invalid board size: {}", e)))?;
        info!(board_size = config.board_size(), komi = config.komi(), "Engine created");
        Ok(Self {
            game,
            komi: *config.komi(),
            running: true,
            name: config.name().clone(),
            version: config.version().clone(),
            generator,
        })
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Stored komi.
    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// False once `quit` has been handled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reads lines from `input` and writes a reply to `output` for each one
    /// until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 gets a failure reply and the loop
    /// carries on. Only I/O errors on the streams end the loop early.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> std::io::Result<()> {
        info!("Engine ready");
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input");
                return Ok(());
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    let err = CommandError::Parse(format!("invalid UTF-8 in request: {}", e));
                    warn!(error = %err, "Undecodable request");
                    Some(Response::failure(err.to_string()))
                }
            };
            if let Some(response) = response {
                output.write_all(response.to_string().as_bytes())?;
                output.flush()?;
            }
            if !self.running {
                info!("Quit received");
                return Ok(());
            }
        }
    }

    /// Handles one protocol line. Blank lines and comments yield `None`.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        debug!(line, "Received");
        let request = match Request::parse(line) {
            Ok(Some(request)) => request,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Malformed request");
                return Some(Response::failure(e.to_string()));
            }
        };

        let response = match self.execute(&request) {
            Ok(message) => Response::success(request.id, message),
            Err(e @ CommandError::UnknownCommand(_)) | Err(e @ CommandError::Parse(_)) => {
                warn!(error = %e, "Request rejected");
                Response::failure(e.to_string())
            }
            Err(e) => {
                warn!(command = %request.command, error = %e, "Command failed");
                Response::failure(format!("{} error: {}", request.command, e))
            }
        };
        Some(response)
    }

    /// Runs a parsed request and returns the reply body.
    #[instrument(skip(self), fields(command = %request.command))]
    pub fn execute(&mut self, request: &Request) -> Result<String, CommandError> {
        let kind = CommandKind::lookup(&request.command)
            .ok_or_else(|| CommandError::UnknownCommand(request.command.clone()))?;

        match kind {
            CommandKind::ProtocolVersion => Ok(PROTOCOL_VERSION.to_string()),
            CommandKind::Name => Ok(self.name.clone()),
            CommandKind::Version => Ok(self.version.clone()),
            CommandKind::ListCommands => Ok(CommandKind::all_names().join("\n")),
            CommandKind::BoardSize => self.boardsize(request),
            CommandKind::ClearBoard => {
                self.game.clear();
                Ok(String::new())
            }
            CommandKind::Komi => self.set_komi(request),
            CommandKind::Play => self.play(request),
            CommandKind::GenMove => self.genmove(request),
            CommandKind::Quit => {
                self.running = false;
                Ok(String::new())
            }
            CommandKind::GameId => Ok(GAME_ID.to_string()),
            CommandKind::Board => Ok(self.game.board().display()),
            CommandKind::BoardGfx => Ok(String::new()),
            CommandKind::CapturedCount => Ok("0 0".to_string()),
            CommandKind::BoardSizeQuery => Ok(self.game.board().size().to_string()),
            CommandKind::LegalMoves => Ok(self.legal_moves()),
            CommandKind::SideToMove => Ok(self.game.side_to_move().wire_name().to_string()),
            CommandKind::FinalResult => Ok(self.final_result()),
        }
    }

    fn boardsize(&mut self, request: &Request) -> Result<String, CommandError> {
        let arg = request.arg(0, "size")?;
        let size: usize = arg
            .parse()
            .map_err(|_| CommandError::invalid_argument(format!("invalid board size: {}", arg)))?;
        self.game.resize(size)?;
        Ok(String::new())
    }

    fn set_komi(&mut self, request: &Request) -> Result<String, CommandError> {
        let arg = request.arg(0, "komi")?;
        let komi: f64 = arg
            .parse()
            .ok()
            .filter(|k: &f64| k.is_finite())
            .ok_or_else(|| CommandError::invalid_argument(format!("invalid komi: {}", arg)))?;
        self.komi = komi;
        debug!(komi, "Komi set");
        Ok(String::new())
    }

    fn play(&mut self, request: &Request) -> Result<String, CommandError> {
        let color = Stone::from_token(request.arg(0, "color")?)?;
        let vertex = self.game.board().parse_vertex(request.arg(1, "vertex")?)?;
        self.game.play(color, vertex)?;
        Ok(String::new())
    }

    fn genmove(&mut self, request: &Request) -> Result<String, CommandError> {
        let color = match request.args.first() {
            Some(token) => Stone::from_token(token)?,
            None => self.game.side_to_move(),
        };

        let vertex = match self.generator.select(self.game.board(), color) {
            Some(coord) => Vertex::Point(coord),
            None => Vertex::Pass,
        };
        self.game.play(color, vertex)?;

        let text = vertex.to_text(self.game.board().size());
        info!(%color, vertex = %text, "Generated move");
        Ok(text)
    }

    fn legal_moves(&mut self) -> String {
        let board_size = self.game.board().size();
        self.game
            .legal_moves()
            .into_iter()
            .map(|coord| connect6_rules::coord_to_vertex(coord, board_size))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn final_result(&mut self) -> String {
        match self.game.decide() {
            Some(winner) => format!("{} wins.", winner),
            None => "No result.".to_string(),
        }
    }
}
