//! A small grid maze with hidden position and orientation state.
//!
//! Intents are keyed by the first character of the intended label:
//! `|` move forward, `^` turn left, `v` turn right, `-` touch forward,
//! `/` touch left, `\` touch right. Moves and touches against empty cells
//! report a `…t`/`…f` outcome pair; only the agent's valences make one of
//! them pleasant.

use praxis_core::{Environment, InteractionId, InteractionStore};

const MAZE_SIZE: usize = 6;
const AGENT_ICONS: [char; 4] = ['^', '>', 'v', '<'];
const MAZE_MAP: &str = "\nxxxxxx\nx    x\nx xx x\nx  x x\nxx   x\nxxxxxx\n";

/// Orientation: 0 north, 1 east, 2 south, 3 west.
#[derive(Debug)]
pub struct Maze {
    map: Vec<char>,
    position: (usize, usize),
    orientation: usize,
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

impl Maze {
    pub fn new() -> Self {
        Self {
            map: MAZE_MAP.chars().collect(),
            position: (4, 1),
            orientation: 2,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    pub fn orientation(&self) -> usize {
        self.orientation
    }

    /// The map with the agent icon overlaid on its cell.
    pub fn render(&self) -> String {
        let mut cells = self.map.clone();
        cells[Self::to_index(self.position)] = AGENT_ICONS[self.orientation];
        cells.into_iter().collect()
    }

    // The map string starts with a newline, hence the +1; rows stride by
    // MAZE_SIZE + 1 to skip the newline between them.
    fn to_index((x, y): (usize, usize)) -> usize {
        y * (1 + MAZE_SIZE) + x + 1
    }

    fn empty(&self, position: (usize, usize)) -> bool {
        self.map[Self::to_index(position)] == ' '
    }

    fn outcome(
        &self,
        store: &mut InteractionStore,
        label: &str,
    ) -> InteractionId {
        store.get_or_create_primitive(label, 0)
    }

    fn move_forward(&mut self, store: &mut InteractionStore) -> InteractionId {
        let (x, y) = self.position;

        if self.orientation == 0 && y > 0 && self.empty((x, y - 1)) {
            self.position = (x, y - 1);
            return self.outcome(store, "|t");
        }
        if self.orientation == 2 && y < MAZE_SIZE && self.empty((x, y + 1)) {
            self.position = (x, y + 1);
            return self.outcome(store, "|t");
        }
        if self.orientation == 1 && x < MAZE_SIZE && self.empty((x + 1, y)) {
            self.position = (x + 1, y);
            return self.outcome(store, "|t");
        }
        if self.orientation == 3 && x > 0 && self.empty((x - 1, y)) {
            self.position = (x - 1, y);
            return self.outcome(store, "|t");
        }

        self.outcome(store, "|f")
    }

    fn turn_left(&mut self, store: &mut InteractionStore) -> InteractionId {
        self.orientation = (self.orientation + 3) % 4;
        self.outcome(store, "^t")
    }

    fn turn_right(&mut self, store: &mut InteractionStore) -> InteractionId {
        self.orientation = (self.orientation + 1) % 4;
        self.outcome(store, "vt")
    }

    fn touch_forward(&mut self, store: &mut InteractionStore) -> InteractionId {
        let (x, y) = self.position;
        let felt_nothing = (self.orientation == 0 && y > 0 && self.empty((x, y - 1)))
            || (self.orientation == 1 && x > 0 && self.empty((x - 1, y)))
            || (self.orientation == 2 && y < MAZE_SIZE && self.empty((x, y + 1)))
            || (self.orientation == 3 && x < MAZE_SIZE && self.empty((x + 1, y)));
        if felt_nothing {
            self.outcome(store, "-f")
        } else {
            self.outcome(store, "-t")
        }
    }

    fn touch_left(&mut self, store: &mut InteractionStore) -> InteractionId {
        let (x, y) = self.position;
        let felt_nothing = (self.orientation == 0 && x > 0 && self.empty((x - 1, y)))
            || (self.orientation == 1 && y > 0 && self.empty((x, y - 1)))
            || (self.orientation == 2 && x < MAZE_SIZE && self.empty((x + 1, y)))
            || (self.orientation == 3 && y < MAZE_SIZE && self.empty((x, y + 1)));
        if felt_nothing {
            self.outcome(store, "/f")
        } else {
            self.outcome(store, "/t")
        }
    }

    fn touch_right(&mut self, store: &mut InteractionStore) -> InteractionId {
        let (x, y) = self.position;
        let felt_nothing = (self.orientation == 0 && x > 0 && self.empty((x + 1, y)))
            || (self.orientation == 1 && y < MAZE_SIZE && self.empty((x, y + 1)))
            || (self.orientation == 2 && x < MAZE_SIZE && self.empty((x - 1, y)))
            || (self.orientation == 3 && y > 0 && self.empty((x, y - 1)));
        if felt_nothing {
            self.outcome(store, "\\f")
        } else {
            self.outcome(store, "\\t")
        }
    }
}

impl Environment for Maze {
    fn perform(&mut self, store: &mut InteractionStore, intended: InteractionId) -> InteractionId {
        let key = store.label(intended).chars().next();
        match key {
            Some('|') => self.move_forward(store),
            Some('^') => self.turn_left(store),
            Some('v') => self.turn_right(store),
            Some('-') => self.touch_forward(store),
            Some('/') => self.touch_left(store),
            Some('\\') => self.touch_right(store),
            _ => {
                tracing::warn!(label = %store.label(intended), "unknown maze intent");
                intended
            }
        }
    }
}
