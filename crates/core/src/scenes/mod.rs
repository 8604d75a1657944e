//! The fixed screen table.
//!
//! Every coordinate here belongs to one game build at 1920×1080. Scenes are
//! pure data; [`crate::player::ScenePlayer`] plays them.

mod buildings;
mod daily_reward;
mod startup;
mod trial;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::directive::{Action, Directive};
use crate::error::Error;
use crate::player::SWIPE_SETTLE;

pub use daily_reward::reward_grid;
pub use trial::{GOD_SHINOBI_TOWER, SENIOR_NINJA_TRIAL, TrialSpec};

/// Scene names in the order a run plays them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneId {
	ClosePopup,
	ChooseServer,
	CloseAnnouncements,
	CollectBuildings,
	DailyReward,
	TrialA,
	TrialB,
}

impl SceneId {
	pub const ALL: [SceneId; 7] = [
		SceneId::ClosePopup,
		SceneId::ChooseServer,
		SceneId::CloseAnnouncements,
		SceneId::CollectBuildings,
		SceneId::DailyReward,
		SceneId::TrialA,
		SceneId::TrialB,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			SceneId::ClosePopup => "close-popup",
			SceneId::ChooseServer => "choose-server",
			SceneId::CloseAnnouncements => "close-announcements",
			SceneId::CollectBuildings => "collect-buildings",
			SceneId::DailyReward => "daily-reward",
			SceneId::TrialA => "trial-a",
			SceneId::TrialB => "trial-b",
		}
	}

	/// Human-readable title for progress output.
	pub fn title(self) -> &'static str {
		match self {
			SceneId::ClosePopup => "Close initial popup",
			SceneId::ChooseServer => "Choose server",
			SceneId::CloseAnnouncements => "Close announcements",
			SceneId::CollectBuildings => "Collect buildings",
			SceneId::DailyReward => "Collect daily reward",
			SceneId::TrialA => "Senior Ninja Trial",
			SceneId::TrialB => "God Shinobi Tower",
		}
	}

	/// Builds this scene's directive table.
	pub fn scene(self) -> Scene {
		let directives = match self {
			SceneId::ClosePopup => startup::close_popup(),
			SceneId::ChooseServer => startup::choose_server(),
			SceneId::CloseAnnouncements => startup::close_announcements(),
			SceneId::CollectBuildings => buildings::collect_buildings(),
			SceneId::DailyReward => daily_reward::collect_daily_reward(),
			SceneId::TrialA => trial::trial(&SENIOR_NINJA_TRIAL),
			SceneId::TrialB => trial::trial(&GOD_SHINOBI_TOWER),
		};
		Scene::new(self, directives)
	}
}

impl fmt::Display for SceneId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SceneId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SceneId::ALL
			.into_iter()
			.find(|id| id.as_str() == s)
			.ok_or_else(|| Error::UnknownScene(s.to_string()))
	}
}

/// A named, ordered list of directives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scene {
	pub id: SceneId,
	pub directives: Vec<Directive>,
}

impl Scene {
	pub fn new(id: SceneId, directives: Vec<Directive>) -> Self {
		Self { id, directives }
	}

	pub fn input_count(&self) -> usize {
		self.directives.iter().filter(|d| d.is_input()).count()
	}

	/// Wall-clock time the scene takes when every input succeeds: post-delays,
	/// on-device swipe time and the settle pause after each swipe.
	pub fn estimated_duration(&self) -> Duration {
		self.directives
			.iter()
			.map(|d| match d.action {
				Action::Swipe(swipe) => d.post_delay + swipe.duration + SWIPE_SETTLE,
				Action::Tap(_) | Action::Idle => d.post_delay,
			})
			.sum()
	}
}

/// Every scene, in play order.
pub fn script() -> Vec<Scene> {
	SceneId::ALL.into_iter().map(SceneId::scene).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::Point;

	#[test]
	fn names_round_trip_through_from_str() {
		for id in SceneId::ALL {
			assert_eq!(id.as_str().parse::<SceneId>().unwrap(), id);
		}
		assert!("trial-c".parse::<SceneId>().is_err());
	}

	#[test]
	fn script_follows_fixed_order() {
		let ids: Vec<_> = script().into_iter().map(|s| s.id).collect();
		assert_eq!(ids, SceneId::ALL);
	}

	#[test]
	fn close_popup_is_one_tap() {
		let scene = SceneId::ClosePopup.scene();
		assert_eq!(scene.input_count(), 1);
		assert_eq!(scene.directives[0].action, Action::Tap(Point::new(906, 868)));
	}

	#[test]
	fn choose_server_scrolls_six_times() {
		let scene = SceneId::ChooseServer.scene();
		let swipes = scene
			.directives
			.iter()
			.filter(|d| matches!(d.action, Action::Swipe(_)))
			.count();
		assert_eq!(swipes, 6);
		assert_eq!(scene.input_count(), 9);
	}

	#[test]
	fn collect_buildings_visits_four_screens_and_returns() {
		let scene = SceneId::CollectBuildings.scene();
		let taps = scene
			.directives
			.iter()
			.filter(|d| matches!(d.action, Action::Tap(_)))
			.count();
		let swipes = scene.input_count() - taps;
		assert_eq!(taps, 12);
		assert_eq!(swipes, 3 + 4);
	}

	#[test]
	fn close_announcements_takes_four_seconds() {
		assert_eq!(
			SceneId::CloseAnnouncements.scene().estimated_duration(),
			Duration::from_secs(4)
		);
	}

	#[test]
	fn choose_server_estimate_counts_swipe_time() {
		// taps: 2 + 2 + 5, swipes: 6 × (1 wait + 6 on device + 1 settle)
		assert_eq!(
			SceneId::ChooseServer.scene().estimated_duration(),
			Duration::from_secs(9 + 6 * 8)
		);
	}
}
