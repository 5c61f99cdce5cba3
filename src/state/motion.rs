use crate::models::MotionGame;

/// Motion hub screen: the game roster and which games are live.
#[derive(Debug, Clone)]
pub struct MotionHub {
    pub games: Vec<MotionGame>,
}

#[derive(Debug, Clone)]
pub enum MotionAction {
    ToggleGame(String),
}

impl MotionHub {
    pub fn new(games: Vec<MotionGame>) -> Self {
        MotionHub { games }
    }

    pub fn active_count(&self) -> usize {
        self.games.iter().filter(|g| g.is_active).count()
    }

    pub fn apply(&mut self, action: MotionAction) {
        match action {
            MotionAction::ToggleGame(id) => {
                if let Some(game) = self.games.iter_mut().find(|g| g.id == id) {
                    game.is_active = !game.is_active;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_toggle_flips_one_game() {
        let mut hub = MotionHub::new(seed::motion_games());
        assert_eq!(hub.active_count(), 1);

        hub.apply(MotionAction::ToggleGame("g2".to_string()));
        assert_eq!(hub.active_count(), 2);

        hub.apply(MotionAction::ToggleGame("g2".to_string()));
        assert_eq!(hub.active_count(), 1);
    }

    #[test]
    fn test_unknown_game_is_a_noop() {
        let mut hub = MotionHub::new(seed::motion_games());
        hub.apply(MotionAction::ToggleGame("g99".to_string()));
        assert_eq!(hub.active_count(), 1);
    }
}
