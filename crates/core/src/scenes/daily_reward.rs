//! Daily event panel and the 28-day reward calendar.

use crate::device::Point;
use crate::directive::{Directive, secs};
use crate::grid::Grid;

const DAILY_EVENT: Point = Point::new(1650, 90);
const DAILY_REWARD: Point = Point::new(660, 560);
const OK: Point = Point::new(960, 860);
const CLOSE_REWARD: Point = Point::new(1650, 120);
const CLOSE_EVENT: Point = Point::new(1700, 140);

/// The reward calendar: 7 days per row, 4 rows.
pub fn reward_grid() -> Grid {
	Grid::new(Point::new(530, 380), Point::new(1490, 850), 7, 4)
}

pub(super) fn collect_daily_reward() -> Vec<Directive> {
	let mut steps = vec![
		Directive::tap_at(DAILY_EVENT)
			.say("Clicking Daily Event button")
			.then_wait(secs(2)),
		Directive::tap_at(DAILY_REWARD)
			.say("Clicking Daily Reward button")
			.then_wait(secs(2)),
	];

	steps.extend(reward_grid().points().enumerate().map(|(i, at)| {
		let day = i + 1;
		Directive::tap_at(at).say(format!("Clicking Daily Reward {day} at {at}"))
	}));

	steps.extend([
		Directive::tap_at(OK).say("Clicking OK button").then_wait(secs(1)),
		Directive::tap_at(CLOSE_REWARD)
			.say("Clicking X button to close Daily Reward screen")
			.then_wait(secs(1)),
		Directive::tap_at(CLOSE_EVENT)
			.say("Clicking X button to close Daily Event screen")
			.then_wait(secs(1)),
	]);
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::directive::Action;

	#[test]
	fn days_are_labelled_in_grid_order() {
		let steps = collect_daily_reward();
		let days: Vec<_> = steps[2..30].iter().collect();

		for (i, (step, at)) in days.iter().zip(reward_grid().points()).enumerate() {
			assert_eq!(step.action, Action::Tap(at));
			assert_eq!(
				step.note.as_deref(),
				Some(format!("Clicking Daily Reward {} at {at}", i + 1).as_str())
			);
		}
		assert_eq!(
			days[27].note.as_deref(),
			Some("Clicking Daily Reward 28 at (1490, 848)")
		);
	}

	#[test]
	fn reward_taps_have_no_pause_between_them() {
		let steps = collect_daily_reward();
		assert!(steps[2..30].iter().all(|d| d.post_delay.is_zero()));
		assert_eq!(steps.len(), 2 + 28 + 3);
	}
}
