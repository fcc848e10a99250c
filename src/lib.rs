//! Connect6 engine speaking a GTP-style text protocol.
//!
//! The engine reads one command per line and answers each with a `=` or `?`
//! reply. Besides the usual GTP commands it implements the GoGui rules
//! commands (`gogui-rules_legal_moves`, `gogui-rules_final_result`, ...), so
//! GoGui can use it as a Connect6 referee.
//!
//! # Architecture
//!
//! - **Rules**: board, vertices, turn cycle and win detection live in the
//!   [`connect6_rules`] crate
//! - **Protocol**: request parsing and reply formatting
//! - **Engine**: game state plus the command dispatcher and run loop
//! - **Generator**: the random `genmove` player
//!
//! # Example
//!
//! ```
//! use connect6_gtp::{Engine, EngineConfig};
//! use std::io::Cursor;
//!
//! let config = EngineConfig::new().with_seed(1);
//! let mut engine = Engine::new(&config).unwrap();
//! let mut out = Vec::new();
//! engine.run(Cursor::new("1 boardsize 9\n2 play b E5\n3 side_to_move\n"), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "= 1 \n\n= 2 \n\n= 3 white\n\n");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod config;
mod engine;
mod error;
mod generator;
mod protocol;

// Crate-level exports - Engine and dispatch
pub use command::CommandKind;
pub use engine::{Engine, GAME_ID, PROTOCOL_VERSION};
pub use error::CommandError;
pub use protocol::{Request, Response};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Move generation
pub use generator::{MoveGenerator, RandomMoveGenerator};

// Crate-level exports - Game types
pub use connect6_rules::{Board, Cell, Coord, Game, Move, Stone, TurnPhase, Vertex};
