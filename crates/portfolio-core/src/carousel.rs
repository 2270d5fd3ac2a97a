//! Project Carousel
//!
//! A window of [`WINDOW_SIZE`] consecutive items over a cyclic list,
//! moved one step at a time by explicit prev/next navigation.
//! The direction of the last move is kept only as a transition hint.

use crate::error::CarouselError;

/// Number of cards shown at once
pub const WINDOW_SIZE: usize = 3;

/// Direction of the last navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Edge the incoming cards slide in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Right,
    Left,
}

impl Direction {
    /// Render hint for the transition that follows a move in this direction
    pub fn slide_from(self) -> SlideFrom {
        match self {
            Direction::Forward => SlideFrom::Right,
            Direction::Backward => SlideFrom::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCarousel<T> {
    items: Vec<T>,
    current_index: usize,
    direction: Direction,
}

impl<T> ProjectCarousel<T> {
    /// Build a carousel positioned at the first item.
    /// Lists shorter than the window are rejected.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.len() < WINDOW_SIZE {
            return Err(CarouselError {
                required: WINDOW_SIZE,
                actual: items.len(),
            });
        }
        Ok(Self {
            items,
            current_index: 0,
            direction: Direction::Forward,
        })
    }

    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.current_index = (self.current_index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let n = self.items.len();
        self.direction = Direction::Backward;
        self.current_index = (self.current_index + n - 1) % n;
    }

    /// Indices of the visible window, wrapping past the end of the list
    pub fn window_indices(&self) -> [usize; WINDOW_SIZE] {
        let n = self.items.len();
        std::array::from_fn(|offset| (self.current_index + offset) % n)
    }

    pub fn visible_window(&self) -> [&T; WINDOW_SIZE] {
        self.window_indices().map(|i| &self.items[i])
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}
