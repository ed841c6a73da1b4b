// View Mode
// Layout switch for the user list and the highlight of its two controls

/// Presentation layout of the user list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

/// Highlight applied to a mode switch control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Primary,
    Secondary,
}

/// Highlight of both mode switch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControls {
    pub card: ButtonColor,
    pub table: ButtonColor,
}

impl ViewMode {
    /// The active mode's control is primary, the other secondary
    pub fn button_colors(self) -> ModeControls {
        match self {
            ViewMode::Card => ModeControls {
                card: ButtonColor::Primary,
                table: ButtonColor::Secondary,
            },
            ViewMode::Table => ModeControls {
                card: ButtonColor::Secondary,
                table: ButtonColor::Primary,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Card => "Card",
            ViewMode::Table => "Table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_card() {
        assert_eq!(ViewMode::default(), ViewMode::Card);
    }

    #[test]
    fn test_exactly_one_control_is_primary() {
        for mode in [ViewMode::Card, ViewMode::Table] {
            let controls = mode.button_colors();
            assert_ne!(controls.card, controls.table);
        }
        assert_eq!(ViewMode::Table.button_colors().table, ButtonColor::Primary);
        assert_eq!(ViewMode::Card.button_colors().card, ButtonColor::Primary);
    }
}
