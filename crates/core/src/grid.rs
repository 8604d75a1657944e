//! Evenly spaced tap grids.

use crate::device::Point;

/// `cols × rows` points spread across a bounding box.
///
/// Steps use integer division, so the last column/row can fall short of the
/// box edge by up to `count - 2` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
	pub top_left: Point,
	pub bottom_right: Point,
	pub cols: u32,
	pub rows: u32,
}

impl Grid {
	pub const fn new(top_left: Point, bottom_right: Point, cols: u32, rows: u32) -> Self {
		Self {
			top_left,
			bottom_right,
			cols,
			rows,
		}
	}

	pub fn step_x(&self) -> i32 {
		step(self.top_left.x, self.bottom_right.x, self.cols)
	}

	pub fn step_y(&self) -> i32 {
		step(self.top_left.y, self.bottom_right.y, self.rows)
	}

	pub fn len(&self) -> usize {
		self.cols as usize * self.rows as usize
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Points in row-major order.
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		let (step_x, step_y) = (self.step_x(), self.step_y());
		(0..self.rows as i32).flat_map(move |row| {
			(0..self.cols as i32).map(move |col| {
				Point::new(
					self.top_left.x + col * step_x,
					self.top_left.y + row * step_y,
				)
			})
		})
	}
}

fn step(min: i32, max: i32, count: u32) -> i32 {
	if count < 2 {
		return 0;
	}
	(max - min).div_euclid(count as i32 - 1)
}
