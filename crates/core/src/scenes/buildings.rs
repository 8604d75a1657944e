//! The town strip: twelve buildings over four screens.

use crate::device::Point;
use crate::directive::{Directive, millis_of, secs};

/// Building slots visible on each screen of the strip.
const SLOTS: [Point; 3] = [Point::new(300, 600), Point::new(885, 660), Point::new(1490, 600)];
const SCREENS: u32 = 4;

pub(super) const RIGHT_EDGE: Point = Point::new(1900, 540);
pub(super) const LEFT_EDGE: Point = Point::new(50, 540);

/// Swipes from the last screen back to the first.
pub(super) const SWIPES_BACK: u32 = 4;

pub(super) fn collect_buildings() -> Vec<Directive> {
	let forward = SCREENS - 1;
	let mut steps = Vec::new();

	for screen in 1..=SCREENS {
		steps.push(Directive::note(format!(
			"Collecting money from buildings on screen {screen}"
		)));
		steps.extend(
			SLOTS
				.iter()
				.map(|&slot| Directive::tap_at(slot).then_wait(millis_of(500))),
		);
		if screen <= forward {
			steps.push(
				Directive::swipe(RIGHT_EDGE, LEFT_EDGE)
					.say(format!(
						"Swiping to next set of buildings (Swipe {screen}/{forward})"
					))
					.then_wait(secs(1)),
			);
		}
	}

	steps.extend(back_to_first_screen());
	steps
}

/// Swipes left-to-right until the first screen of buildings is showing.
pub(super) fn back_to_first_screen() -> Vec<Directive> {
	(1..=SWIPES_BACK)
		.map(|i| {
			Directive::swipe(LEFT_EDGE, RIGHT_EDGE)
				.say(format!(
					"Swiping back to the first set of buildings (Swipe {i}/{SWIPES_BACK})"
				))
				.then_wait(secs(1))
		})
		.collect()
}
