//! Level progression across a pack.

use super::config::GameConfig;
use super::error::{ConfigurationError, SessionError};
use super::session::{GameSession, SelectOutcome};
use super::types::PegId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

/// Plain progress data for an external persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Progress {
    /// Level currently being played.
    level_index: usize,
    /// Levels won at least once.
    completed: BTreeSet<usize>,
}

impl Progress {
    /// Creates progress data.
    pub fn new(level_index: usize, completed: BTreeSet<usize>) -> Self {
        Self {
            level_index,
            completed,
        }
    }
}

/// Where the campaign stands after advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// The level at this index is loaded.
    Loaded(usize),
    /// No levels remain.
    Finished,
}

/// Plays a pack level by level.
#[derive(Debug, Clone)]
pub struct Campaign {
    config: GameConfig,
    session: GameSession,
    progress: Progress,
}

impl Campaign {
    /// Creates a campaign at the first level. Call [`Campaign::start`] to load it.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigurationError> {
        Self::resume(config, Progress::default())
    }

    /// Creates a campaign from saved progress.
    #[instrument(skip(config))]
    pub fn resume(config: GameConfig, progress: Progress) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let session = GameSession::new(*config.capacity());
        Ok(Self {
            config,
            session,
            progress,
        })
    }

    /// Loads the current level.
    ///
    /// Returns `Finished` if the saved index is past the end of the pack.
    #[instrument(skip(self), fields(level = self.progress.level_index))]
    pub fn start(&mut self) -> Result<CampaignStatus, ConfigurationError> {
        let index = self.progress.level_index;
        if index >= self.config.levels().len() {
            warn!(
                index,
                levels = self.config.levels().len(),
                "No more levels to load"
            );
            return Ok(CampaignStatus::Finished);
        }
        let definition = self.config.level(index)?.clone();
        self.session.load_level(index, definition)?;
        Ok(CampaignStatus::Loaded(index))
    }

    /// Forwards a peg click to the session and records a win.
    #[instrument(skip(self))]
    pub fn select_peg(&mut self, peg: PegId) -> Result<SelectOutcome, SessionError> {
        let outcome = self.session.select_peg(peg)?;
        if let SelectOutcome::Moved { won: true, .. } = outcome
            && let Some(index) = self.session.level_index()
        {
            info!(level = index + 1, "Level completed");
            self.progress.completed.insert(index);
        }
        Ok(outcome)
    }

    /// Moves on to the next level in the pack.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<CampaignStatus, ConfigurationError> {
        self.progress.level_index += 1;
        self.start()
    }

    /// Reloads the current level from its definition.
    #[instrument(skip(self))]
    pub fn restart_level(&mut self) -> Result<CampaignStatus, ConfigurationError> {
        self.start()
    }

    /// Returns true if the loaded level has been won.
    pub fn is_level_won(&self) -> bool {
        self.session.check_win_condition()
    }

    /// Returns the session for the current level.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access to the session, for event draining and deselection.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Returns the level pack.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of progress for saving.
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LevelDefinition, RingColor::*};

    fn pack() -> GameConfig {
        GameConfig::new(
            2,
            vec![
                LevelDefinition::new(2, vec![vec![Red, Red], vec![]], vec![]),
                LevelDefinition::new(2, vec![vec![Red, Blue], vec![Blue, Red]], vec![]),
            ],
        )
    }

    #[test]
    fn test_start_loads_first_level() {
        let mut campaign = Campaign::new(pack()).unwrap();
        assert_eq!(campaign.start().unwrap(), CampaignStatus::Loaded(0));
        assert_eq!(campaign.session().level_index(), Some(0));
        assert!(campaign.is_level_won());
    }

    #[test]
    fn test_advance_past_last_level_finishes() {
        let mut campaign = Campaign::new(pack()).unwrap();
        campaign.start().unwrap();
        assert_eq!(campaign.advance().unwrap(), CampaignStatus::Loaded(1));
        assert_eq!(campaign.advance().unwrap(), CampaignStatus::Finished);
        // The last loaded level stays in place.
        assert_eq!(campaign.session().level_index(), Some(1));
    }

    #[test]
    fn test_resume_from_progress() {
        let progress = Progress::new(1, BTreeSet::from([0]));
        let mut campaign = Campaign::resume(pack(), progress.clone()).unwrap();
        assert_eq!(campaign.start().unwrap(), CampaignStatus::Loaded(1));
        assert_eq!(campaign.progress(), progress);
    }
}
