//! Color mapping for teams

use crate::marker::Team;

/// RGBA color type, components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Trait for mapping teams to colors
pub trait TeamColorMapper {
    /// Map a team to an RGBA color
    fn map_color(&self, team: Team) -> Rgba;
}

/// Default board colors: blue home side, red away side, yellow ball
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTeamColors;

impl TeamColorMapper for BasicTeamColors {
    fn map_color(&self, team: Team) -> Rgba {
        match team {
            Team::Home => [0.0, 0.0, 1.0, 1.0], // Blue
            Team::Away => [1.0, 0.0, 0.0, 1.0], // Red
            Team::Ball => [1.0, 1.0, 0.0, 1.0], // Yellow
        }
    }
}

/// Color mapper with user-chosen colors per team
#[derive(Debug, Clone)]
pub struct CustomTeamColors {
    pub home: Rgba,
    pub away: Rgba,
    pub ball: Rgba,
}

impl Default for CustomTeamColors {
    fn default() -> Self {
        Self {
            home: BasicTeamColors.map_color(Team::Home),
            away: BasicTeamColors.map_color(Team::Away),
            ball: BasicTeamColors.map_color(Team::Ball),
        }
    }
}

impl TeamColorMapper for CustomTeamColors {
    fn map_color(&self, team: Team) -> Rgba {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
            Team::Ball => self.ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_team_colors() {
        let mapper = BasicTeamColors;

        let home = mapper.map_color(Team::Home);
        assert_eq!(home[3], 1.0);
        assert!(home[2] > 0.5); // Blue channel should be high

        let away = mapper.map_color(Team::Away);
        assert!(away[0] > 0.5); // Red channel should be high

        assert_ne!(home, away);
    }

    #[test]
    fn test_custom_team_colors() {
        let custom = CustomTeamColors {
            home: [1.0, 1.0, 1.0, 1.0],
            ..Default::default()
        };

        assert_eq!(custom.map_color(Team::Home), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(custom.map_color(Team::Away), BasicTeamColors.map_color(Team::Away));
    }
}
