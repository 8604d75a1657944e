//! Launch screens: the first popup, the server list and the news panels.

use crate::device::Point;
use crate::directive::{Directive, secs};

const CLOSE_POPUP: Point = Point::new(906, 868);

const CHOOSE_SERVER: Point = Point::new(1000, 800);
const SERVER_LIST_TOP: Point = Point::new(1000, 300);
const SERVER_SCROLLS: u32 = 6;
const TARGET_SERVER: Point = Point::new(985, 487);
const PLAY: Point = Point::new(1000, 970);

const ANNOUNCEMENTS_CLOSE: Point = Point::new(1520, 167);
const EVENT_RANKING_CLOSE: Point = Point::new(1480, 85);

pub(super) fn close_popup() -> Vec<Directive> {
	vec![
		Directive::tap_at(CLOSE_POPUP)
			.say(format!("Clicking Close button at {CLOSE_POPUP}"))
			// announcement fade-out
			.then_wait(secs(8)),
	]
}

pub(super) fn choose_server() -> Vec<Directive> {
	let mut steps = vec![
		Directive::tap_at(CHOOSE_SERVER)
			.say(format!("Clicking Choose Server button at {CHOOSE_SERVER}"))
			.then_wait(secs(2)),
	];

	for i in 1..=SERVER_SCROLLS {
		steps.push(
			Directive::swipe(CHOOSE_SERVER, SERVER_LIST_TOP)
				.say(format!(
					"Scrolling to find the server (Swipe {i}/{SERVER_SCROLLS}) from {CHOOSE_SERVER} to {SERVER_LIST_TOP}"
				))
				.then_wait(secs(1)),
		);
	}

	steps.extend([
		Directive::tap_at(TARGET_SERVER)
			.say(format!("Clicking target server at {TARGET_SERVER}"))
			.then_wait(secs(2)),
		Directive::tap_at(PLAY)
			.say(format!("Clicking Play button at {PLAY}"))
			// game load until announcements show
			.then_wait(secs(5)),
	]);
	steps
}

pub(super) fn close_announcements() -> Vec<Directive> {
	vec![
		Directive::tap_at(ANNOUNCEMENTS_CLOSE)
			.say(format!("Clicking Announcements X button at {ANNOUNCEMENTS_CLOSE}"))
			.then_wait(secs(1)),
		Directive::tap_at(EVENT_RANKING_CLOSE)
			.say(format!("Clicking Event Ranking X button at {EVENT_RANKING_CLOSE}"))
			.then_wait(secs(1)),
		Directive::wait(secs(2)),
	]
}
