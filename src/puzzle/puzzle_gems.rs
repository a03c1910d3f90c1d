// Built-in puzzle: "Precious Gems", 8x6.
// Every cell belongs to exactly one theme word.
use super::SolutionPath;

pub const GEMS_THEME: &str = "Precious Gems";
pub const GEMS_DATE: &str = "2025-06-27";

pub const GEMS_GRID: [&str; 8] = [
    "URAPPI",
    "BSWEHR",
    "YEEMLE",
    "JTHSAT",
    "GSYTOE",
    "ARENEM",
    "NTPTDR",
    "EZAOLA",
];

pub const GEMS_WORDS: [&str; 7] = [
    "RUBY",
    "SAPPHIRE",
    "AMETHYST",
    "JEWELTONES",
    "GARNET",
    "TOPAZ",
    "EMERALD",
];

pub const GEMS_SOLUTION: [SolutionPath; 7] = [
    ("RUBY", &[(0, 1), (0, 0), (1, 0), (2, 0)]),
    ("SAPPHIRE", &[(1, 1), (0, 2), (0, 3), (0, 4), (1, 4), (0, 5), (1, 5), (2, 5)]),
    ("AMETHYST", &[(3, 4), (2, 3), (2, 2), (3, 1), (3, 2), (4, 2), (3, 3), (4, 3)]),
    (
        "JEWELTONES",
        &[(3, 0), (2, 1), (1, 2), (1, 3), (2, 4), (3, 5), (4, 4), (5, 3), (5, 2), (4, 1)],
    ),
    ("GARNET", &[(4, 0), (5, 0), (5, 1), (6, 0), (7, 0), (6, 1)]),
    ("TOPAZ", &[(6, 3), (7, 3), (6, 2), (7, 2), (7, 1)]),
    ("EMERALD", &[(4, 5), (5, 5), (5, 4), (6, 5), (7, 5), (7, 4), (6, 4)]),
];
