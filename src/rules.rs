//! The four rules of Conway's Game of Life.

/// A rule that decides a cell's next state from its current state and its
/// live-neighbor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Live cell with fewer than two live neighbors dies.
    Underpopulation,
    /// Live cell with two or three live neighbors lives on.
    Survival,
    /// Live cell with more than three live neighbors dies.
    Overpopulation,
    /// Dead cell with exactly three live neighbors becomes alive.
    Birth,
}

/// Evaluation order: deaths before survival and birth.
const ORDER: [Rule; 4] = [
    Rule::Underpopulation,
    Rule::Overpopulation,
    Rule::Survival,
    Rule::Birth,
];

impl Rule {
    pub fn applies(self, alive: bool, neighbors: u8) -> bool {
        match self {
            Rule::Underpopulation => alive && neighbors < 2,
            Rule::Survival => alive && (neighbors == 2 || neighbors == 3),
            Rule::Overpopulation => alive && neighbors > 3,
            Rule::Birth => !alive && neighbors == 3,
        }
    }

    /// State of the cell after this rule fires.
    pub fn outcome(self) -> bool {
        matches!(self, Rule::Survival | Rule::Birth)
    }
}

/// Finds the first rule that applies to a cell, death rules first.
///
/// `None` means no rule applies and the cell keeps its state.
pub fn evaluate(alive: bool, neighbors: u8) -> Option<Rule> {
    ORDER.into_iter().find(|rule| rule.applies(alive, neighbors))
}

/// Next state of a cell with the given live-neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    evaluate(alive, neighbors).map_or(alive, Rule::outcome)
}
