//! Logical game actions.

use std::fmt;

/// A device-independent game command.
///
/// New actions are appended to the end of the enum and to [`GameInputAction::ALL`];
/// the stable name returned by [`GameInputAction::name`] is what is persisted,
/// so existing names must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameInputAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    FirePrimary,
    FireSecondary,
    FireThird,
    FireUltimate,
}

impl GameInputAction {
    /// Number of actions.
    pub const COUNT: usize = 8;

    /// Every action in enumeration order.
    pub const ALL: [GameInputAction; 8] = [
        GameInputAction::MoveForward,
        GameInputAction::MoveBackward,
        GameInputAction::MoveLeft,
        GameInputAction::MoveRight,
        GameInputAction::FirePrimary,
        GameInputAction::FireSecondary,
        GameInputAction::FireThird,
        GameInputAction::FireUltimate,
    ];

    /// Stable serialization name.
    pub fn name(self) -> &'static str {
        match self {
            GameInputAction::MoveForward => "MoveForward",
            GameInputAction::MoveBackward => "MoveBackward",
            GameInputAction::MoveLeft => "MoveLeft",
            GameInputAction::MoveRight => "MoveRight",
            GameInputAction::FirePrimary => "FirePrimary",
            GameInputAction::FireSecondary => "FireSecondary",
            GameInputAction::FireThird => "FireThird",
            GameInputAction::FireUltimate => "FireUltimate",
        }
    }

    /// Exact, case-sensitive inverse of [`GameInputAction::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

impl fmt::Display for GameInputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
