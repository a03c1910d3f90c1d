// Built-in puzzle: "Pets", a 4x4 warm-up board with no fixed date.
use super::SolutionPath;

pub const PETS_THEME: &str = "Pets";

pub const PETS_GRID: [&str; 4] = ["FERR", "DOTE", "GCFI", "ATHS"];

pub const PETS_WORDS: [&str; 4] = ["FERRET", "DOG", "CAT", "FISH"];

pub const PETS_SOLUTION: [SolutionPath; 4] = [
    ("FERRET", &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (1, 2)]),
    ("DOG", &[(1, 0), (1, 1), (2, 0)]),
    ("CAT", &[(2, 1), (3, 0), (3, 1)]),
    ("FISH", &[(2, 2), (2, 3), (3, 3), (3, 2)]),
];
