use std::collections::VecDeque;

use crate::{Coord, Position};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// One cell of the snake, remembering the heading it was created with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub pos: Position,
    pub heading: Direction,
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    heading: Direction,
}

impl Snake {
    /// Builds the snake with its head at `head` and the body trailing one
    /// cell per step behind it, opposite to `heading`.
    pub fn new(head: Position, heading: Direction, length: usize) -> Self {
        let (dx, dy) = heading.delta();
        let body = (0..length)
            .map(|i| {
                let i = i as Coord;
                Segment { pos: (head.0 - dx * i, head.1 - dy * i), heading }
            })
            .collect();
        Snake { body, heading }
    }

    pub fn head(&self) -> Position {
        self.body.front().expect("snake body is never empty").pos
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.iter().any(|s| s.pos == pos)
    }

    /// Where the head lands on the next advance. May be off-grid; the
    /// controller checks bounds before mutating anything.
    pub fn next_head(&self) -> Position {
        let (dx, dy) = self.heading.delta();
        let head = self.head();
        (head.0 + dx, head.1 + dy)
    }

    /// Ignores a turn straight back into the neck.
    pub fn set_heading(&mut self, new_heading: Direction) {
        if new_heading != self.heading.opposite() {
            self.heading = new_heading;
        }
    }

    /// Pushes the new head segment; pops the tail unless growing.
    pub fn advance(&mut self, grow: bool) -> Position {
        let pos = self.next_head();
        self.body.push_front(Segment { pos, heading: self.heading });
        if !grow {
            self.body.pop_back();
        }
        pos
    }

    /// True iff the head shares a cell with any later segment. Called after
    /// the tail-pop decision, so a freshly vacated tail cell does not count.
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|s| s.pos == head)
    }
}
