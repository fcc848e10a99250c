//! Static command table.

use strum::IntoEnumIterator;

/// Every command the engine answers.
///
/// The GoGui rules commands are registered under their `gogui-rules_` wire
/// names and also under a short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum CommandKind {
    /// `protocol_version`
    ProtocolVersion,
    /// `name`
    Name,
    /// `version`
    Version,
    /// `list_commands`
    ListCommands,
    /// `boardsize <n>`
    BoardSize,
    /// `clear_board`
    ClearBoard,
    /// `komi <x>`
    Komi,
    /// `play <color> <vertex>`
    Play,
    /// `genmove [color]`
    GenMove,
    /// `quit`
    Quit,
    /// `gogui-rules_game_id`
    GameId,
    /// `gogui-rules_board`
    Board,
    /// `gogui-rules_board_gfx`
    BoardGfx,
    /// `gogui-rules_captured_count`
    CapturedCount,
    /// `gogui-rules_board_size`
    BoardSizeQuery,
    /// `gogui-rules_legal_moves`
    LegalMoves,
    /// `gogui-rules_side_to_move`
    SideToMove,
    /// `gogui-rules_final_result`
    FinalResult,
}

impl CommandKind {
    /// Canonical wire name.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::ProtocolVersion => "protocol_version",
            CommandKind::Name => "name",
            CommandKind::Version => "version",
            CommandKind::ListCommands => "list_commands",
            CommandKind::BoardSize => "boardsize",
            CommandKind::ClearBoard => "clear_board",
            CommandKind::Komi => "komi",
            CommandKind::Play => "play",
            CommandKind::GenMove => "genmove",
            CommandKind::Quit => "quit",
            CommandKind::GameId => "gogui-rules_game_id",
            CommandKind::Board => "gogui-rules_board",
            CommandKind::BoardGfx => "gogui-rules_board_gfx",
            CommandKind::CapturedCount => "gogui-rules_captured_count",
            CommandKind::BoardSizeQuery => "gogui-rules_board_size",
            CommandKind::LegalMoves => "gogui-rules_legal_moves",
            CommandKind::SideToMove => "gogui-rules_side_to_move",
            CommandKind::FinalResult => "gogui-rules_final_result",
        }
    }

    /// Short alias for the GoGui rules commands.
    pub fn alias(self) -> Option<&'static str> {
        self.name().strip_prefix("gogui-rules_")
    }

    /// Looks up a command by canonical name or alias.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.name() == name || kind.alias() == Some(name))
    }

    /// Every accepted name: canonical names in table order, then aliases.
    pub fn all_names() -> Vec<&'static str> {
        Self::iter()
            .map(Self::name)
            .chain(Self::iter().filter_map(Self::alias))
            .collect()
    }
}
