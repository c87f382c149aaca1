/// Modal scene of the encounter loop.
///
/// `Menu` sits between battles; the two battle scenes track whether the player
/// is idle or choosing an attack target. Confirming a target resolves within a
/// single transition, so that step never appears as a stored scene.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum GameScene {
    #[default]
    #[strum(serialize = "MENU")]
    Menu,
    #[strum(serialize = "BATTLE_BASE")]
    BattleBase,
    #[strum(serialize = "BATTLE_SELECT_ATTACK")]
    SelectingTarget,
}

impl GameScene {
    /// Returns true for both battle scenes.
    pub const fn is_battle(self) -> bool {
        matches!(self, GameScene::BattleBase | GameScene::SelectingTarget)
    }
}
