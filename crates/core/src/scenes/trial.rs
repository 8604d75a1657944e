//! Trial dungeons.
//!
//! Both trials share one choreography: walk the town strip to the trial
//! building, bounce in and out once to reset the floor, then run an open-loop
//! acquire/advance cycle and retreat. Nothing checks whether a cycle landed.

use crate::device::Point;
use crate::directive::{Directive, millis_of, secs};

use super::buildings::{LEFT_EDGE, RIGHT_EDGE, back_to_first_screen};

const QUIT: Point = Point::new(1530, 1020);
const OK: Point = Point::new(950, 660);
const NEXT_FLOOR: Point = Point::new(600, 1030);
const SPEED: Point = Point::new(950, 1000);
const ACQUIRE: Point = Point::new(1730, 920);
const TEMPORARY_RETREAT: Point = Point::new(1400, 915);
const CLOSE_TRIAL: Point = Point::new(1850, 60);

/// Rounds of the acquire/advance cycle.
pub const ROUNDS: u32 = 40;
/// Acquire/advance cycles per round.
pub const CYCLES_PER_ROUND: u32 = 10;
/// Retreat attempts once the rounds are spent.
pub const RETREAT_ATTEMPTS: u32 = 10;

/// Where a trial building sits and how to enter it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialSpec {
	pub building: Point,
	/// Right-to-left swipes from the first screen to the building's screen.
	pub swipes: u32,
	pub enter: Point,
}

pub const SENIOR_NINJA_TRIAL: TrialSpec = TrialSpec {
	building: Point::new(300, 600),
	swipes: 2,
	enter: Point::new(289, 275),
};

pub const GOD_SHINOBI_TOWER: TrialSpec = TrialSpec {
	building: Point::new(1490, 600),
	swipes: 3,
	enter: Point::new(1500, 180),
};

pub(super) fn trial(spec: &TrialSpec) -> Vec<Directive> {
	let mut steps: Vec<Directive> = (1..=spec.swipes)
		.map(|i| {
			Directive::swipe(RIGHT_EDGE, LEFT_EDGE)
				.say(format!(
					"Swiping to the set of buildings (Swipe {i}/{})",
					spec.swipes
				))
				.then_wait(secs(1))
		})
		.collect();

	steps.extend(enter(spec));
	steps.extend(attrition());
	steps.extend(retreat());
	steps.extend(back_to_first_screen());
	steps
}

/// Enters, quits to reset, re-enters and starts climbing at speed.
fn enter(spec: &TrialSpec) -> Vec<Directive> {
	vec![
		Directive::tap_at(spec.building)
			.say("Clicking on the trial building")
			.then_wait(secs(2)),
		Directive::tap_at(spec.enter)
			.say("Clicking the Enter button")
			.then_wait(secs(2)),
		Directive::tap_at(QUIT)
			.say("Clicking the Quit button")
			.then_wait(secs(2)),
		Directive::tap_at(OK)
			.say("Clicking the OK button")
			.then_wait(secs(2)),
		Directive::tap_at(spec.building)
			.say("Clicking on the trial building again")
			.then_wait(secs(2)),
		Directive::tap_at(spec.enter)
			.say("Clicking the Enter button again")
			.then_wait(secs(2)),
		Directive::tap_at(NEXT_FLOOR)
			.say("Clicking the Enter button to start the trial")
			.then_wait(secs(2)),
		Directive::tap_at(NEXT_FLOOR)
			.say("Clicking the Next Floor button")
			.then_wait(secs(8)),
		Directive::tap_at(SPEED).say("Clicking the Speed button"),
	]
}

fn attrition() -> Vec<Directive> {
	let mut steps = Vec::new();
	for round in 0..ROUNDS {
		steps.push(Directive::note(format!(
			"Trying Trial {} left",
			ROUNDS - round
		)));
		for _ in 0..CYCLES_PER_ROUND {
			steps.extend([
				Directive::wait(secs(5)),
				Directive::tap_at(ACQUIRE)
					.say("Clicking the Acquire button")
					.then_wait(millis_of(500)),
				Directive::tap_at(NEXT_FLOOR).say("Clicking the Next Floor button"),
			]);
		}
	}
	steps
}

fn retreat() -> Vec<Directive> {
	let mut steps = Vec::new();
	for attempt in 1..=RETREAT_ATTEMPTS {
		steps.extend([
			Directive::wait(secs(2)),
			Directive::tap_at(TEMPORARY_RETREAT)
				.say(format!(
					"Attempt {attempt}: Clicking Temporary Retreat button"
				))
				.then_wait(secs(5)),
			Directive::tap_at(ACQUIRE)
				.say("Clicking the Acquire button")
				.then_wait(secs(2)),
		]);
	}
	steps.extend([
		Directive::tap_at(TEMPORARY_RETREAT)
			.say("Clicking Temporary Retreat button")
			.then_wait(secs(2)),
		Directive::tap_at(CLOSE_TRIAL)
			.say("Clicking X button to close trial screen")
			.then_wait(secs(2)),
	]);
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::directive::Action;

	fn taps_at(steps: &[Directive], at: Point) -> usize {
		steps.iter().filter(|d| d.action == Action::Tap(at)).count()
	}

	#[test]
	fn attrition_is_rounds_times_cycles() {
		let steps = attrition();
		assert_eq!(taps_at(&steps, ACQUIRE), 400);
		assert_eq!(taps_at(&steps, NEXT_FLOOR), 400);
		assert_eq!(steps[0].note.as_deref(), Some("Trying Trial 40 left"));
		assert_eq!(steps.last().unwrap().action, Action::Tap(NEXT_FLOOR));
	}

	#[test]
	fn cycle_waits_before_acquiring() {
		let steps = attrition();
		assert_eq!(steps[1], Directive::wait(secs(5)));
		assert_eq!(steps[2].post_delay, millis_of(500));
	}

	#[test]
	fn retreat_makes_ten_attempts_then_closes() {
		let steps = retreat();
		assert_eq!(taps_at(&steps, TEMPORARY_RETREAT), 11);
		assert_eq!(taps_at(&steps, ACQUIRE), 10);
		assert_eq!(steps.last().unwrap().action, Action::Tap(CLOSE_TRIAL));
	}

	#[test]
	fn trials_differ_only_in_approach() {
		let a = trial(&SENIOR_NINJA_TRIAL);
		let b = trial(&GOD_SHINOBI_TOWER);
		let swipes = |steps: &[Directive]| {
			steps
				.iter()
				.take_while(|d| matches!(d.action, Action::Swipe(_)))
				.count()
		};
		assert_eq!(swipes(&a), 2);
		assert_eq!(swipes(&b), 3);
		assert_eq!(taps_at(&a, SENIOR_NINJA_TRIAL.enter), 2);
		assert_eq!(taps_at(&b, GOD_SHINOBI_TOWER.enter), 2);
		assert_eq!(b.len(), a.len() + 1);
	}
}
