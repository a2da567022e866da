//! Badge validation service and debounced badge probe
//!
//! `BadgeService::check` is the server-side lookup: exact string match
//! against active qualified drivers. No match and deactivated driver both
//! collapse to "not authorized"; inputs below the minimum length are not
//! looked up at all.
//!
//! `BadgeProbe` is the operator-device helper wrapping the lookup with the
//! keystroke debounce: a lookup fires only after a pause in input, and a
//! newer keystroke supersedes any scheduled or in-flight lookup so the
//! published state is always the latest input's result.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

use crate::{
    config::ChecklistConfig,
    error::AppResult,
    models::driver::Driver,
    repository::{drivers::DriversRepository, Repository},
};

/// Outcome of a badge lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BadgeVerdict {
    /// Input too short to look up; neither valid nor invalid
    Unknown,
    Authorized { driver_name: String },
    NotAuthorized,
}

/// Published state of a `BadgeProbe`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeState {
    /// No lookup pending or possible for the current input
    Unknown,
    /// A lookup is scheduled or in flight
    Checking,
    Authorized { driver_name: String },
    NotAuthorized,
}

/// Lookup backend for badge probing; implemented by the drivers
/// repository, mockable in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeDirectory: Send + Sync {
    async fn find_active_by_badge(&self, badge_number: &str) -> AppResult<Option<Driver>>;
}

#[async_trait]
impl BadgeDirectory for DriversRepository {
    async fn find_active_by_badge(&self, badge_number: &str) -> AppResult<Option<Driver>> {
        DriversRepository::find_active_by_badge(self, badge_number).await
    }
}

#[derive(Clone)]
pub struct BadgeService {
    repository: Repository,
    config: ChecklistConfig,
}

impl BadgeService {
    pub fn new(repository: Repository, config: ChecklistConfig) -> Self {
        Self { repository, config }
    }

    /// Look up a badge number against the active driver list
    pub async fn check(&self, badge_number: &str) -> AppResult<BadgeVerdict> {
        let badge = badge_number.trim();
        if badge.len() < self.config.badge_min_length {
            return Ok(BadgeVerdict::Unknown);
        }
        match self.repository.drivers.find_active_by_badge(badge).await? {
            Some(driver) => Ok(BadgeVerdict::Authorized {
                driver_name: driver.driver_name,
            }),
            None => Ok(BadgeVerdict::NotAuthorized),
        }
    }
}

/// Debounced, superseding badge lookup for an operator device.
///
/// Each `input` bumps a generation counter; the scheduled lookup checks
/// the counter before and after the directory call and discards itself
/// when a newer input exists, so stale results never reach the channel
/// (last-write-wins).
pub struct BadgeProbe {
    directory: Arc<dyn BadgeDirectory>,
    min_length: usize,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<BadgeState>>,
}

impl BadgeProbe {
    pub fn new(directory: Arc<dyn BadgeDirectory>, min_length: usize, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(BadgeState::Unknown);
        Self {
            directory,
            min_length,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    /// Subscribe to published badge state
    pub fn subscribe(&self) -> watch::Receiver<BadgeState> {
        self.tx.subscribe()
    }

    /// Feed the current badge input. Short inputs reset the state
    /// immediately without a lookup; longer inputs schedule a debounced
    /// lookup that a later call supersedes.
    pub fn input(&self, badge_number: &str) {
        let badge = badge_number.trim().to_string();
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if badge.len() < self.min_length {
            self.tx.send_replace(BadgeState::Unknown);
            return;
        }

        self.tx.send_replace(BadgeState::Checking);

        let directory = self.directory.clone();
        let generation = self.generation.clone();
        let tx = self.tx.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if generation.load(Ordering::SeqCst) != my_gen {
                return; // superseded while waiting
            }

            let state = match directory.find_active_by_badge(&badge).await {
                Ok(Some(driver)) => BadgeState::Authorized {
                    driver_name: driver.driver_name,
                },
                Ok(None) => BadgeState::NotAuthorized,
                Err(e) => {
                    tracing::warn!("Badge lookup failed: {}", e);
                    BadgeState::Unknown
                }
            };

            if generation.load(Ordering::SeqCst) != my_gen {
                return; // superseded while the lookup was in flight
            }
            tx.send_replace(state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn driver(badge: &str, name: &str) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            badge_number: badge.to_string(),
            driver_name: name.to_string(),
            is_active: true,
            certified_date: None,
            recertify_date: None,
            trainer: None,
            created_at: Utc::now(),
        }
    }

    async fn wait_for_terminal(rx: &mut watch::Receiver<BadgeState>) -> BadgeState {
        loop {
            let state = rx.borrow_and_update().clone();
            match state {
                BadgeState::Unknown | BadgeState::Checking => {
                    rx.changed().await.expect("probe dropped");
                }
                terminal => return terminal,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn known_badge_publishes_driver_name() {
        let mut directory = MockBadgeDirectory::new();
        directory
            .expect_find_active_by_badge()
            .with(eq("4455"))
            .returning(|_| Ok(Some(driver("4455", "J. Smith"))));

        let probe = BadgeProbe::new(Arc::new(directory), 2, Duration::from_millis(500));
        let mut rx = probe.subscribe();

        probe.input("4455");
        assert_eq!(*rx.borrow(), BadgeState::Checking);

        let state = wait_for_terminal(&mut rx).await;
        assert_eq!(
            state,
            BadgeState::Authorized {
                driver_name: "J. Smith".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_badge_is_not_authorized() {
        let mut directory = MockBadgeDirectory::new();
        directory
            .expect_find_active_by_badge()
            .with(eq("9999"))
            .returning(|_| Ok(None));

        let probe = BadgeProbe::new(Arc::new(directory), 2, Duration::from_millis(500));
        let mut rx = probe.subscribe();

        probe.input("9999");
        let state = wait_for_terminal(&mut rx).await;
        assert_eq!(state, BadgeState::NotAuthorized);
    }

    #[tokio::test(start_paused = true)]
    async fn short_input_resets_without_lookup() {
        // no expectations: any lookup call fails the test
        let directory = MockBadgeDirectory::new();
        let probe = BadgeProbe::new(Arc::new(directory), 2, Duration::from_millis(500));
        let rx = probe.subscribe();

        probe.input("1");
        assert_eq!(*rx.borrow(), BadgeState::Unknown);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*rx.borrow(), BadgeState::Unknown);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_only_latest_lookup_lands() {
        let mut directory = MockBadgeDirectory::new();
        // only the final input may reach the directory
        directory
            .expect_find_active_by_badge()
            .with(eq("123"))
            .times(1)
            .returning(|_| Ok(Some(driver("123", "A. Jones"))));

        let probe = BadgeProbe::new(Arc::new(directory), 2, Duration::from_millis(500));
        let mut rx = probe.subscribe();

        probe.input("1"); // below min length
        probe.input("12"); // superseded before its debounce elapses
        probe.input("123");

        let state = wait_for_terminal(&mut rx).await;
        assert_eq!(
            state,
            BadgeState::Authorized {
                driver_name: "A. Jones".to_string()
            }
        );
    }
}
