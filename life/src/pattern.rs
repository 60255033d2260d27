/// An immutable life-form the user can stamp onto the grid.
///
/// Row-major 0/1 cells, row 0 at the top. Never mutated after parsing, so
/// sharing by reference is always safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Pattern {
    /// Parses a text-art pattern: `#` is a live cell, `.` a dead one, one
    /// line per row.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or stray characters.
    /// Malformed shapes are rejected here, at catalog construction, so the
    /// grid can assume every pattern it is handed is rectangular.
    pub fn parse(name: &'static str, art: &str) -> Option<Self> {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in art.lines() {
            let mut row_width = 0;
            for c in line.chars() {
                match c {
                    '#' => cells.push(1),
                    '.' => cells.push(0),
                    _ => return None,
                }
                row_width += 1;
            }

            if height == 0 {
                width = row_width;
            } else if row_width != width {
                // Ragged
                return None;
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            name,
            width,
            height,
            cells,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pattern-local lookup; `(0, 0)` is the top-left cell.
    ///
    /// Panics outside `[0, width) x [0, height)` — patterns are finite and
    /// do not wrap, that's the grid's job.
    pub fn get(&self, x: i32, y: i32) -> bool {
        assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);

        self.cells[(x + y * self.width) as usize] == 1
    }
}

/// The toolbar palette: every stampable shape, in display order.
///
/// These are the shapes of the original deployment, smallest still life to
/// biggest methuselah.
pub fn catalog() -> Vec<Pattern> {
    let shapes: [(&str, &str); 14] = [
        (
            "block",
            "##\n\
             ##",
        ),
        (
            "beehive",
            ".##.\n\
             #..#\n\
             .##.",
        ),
        (
            "loaf",
            ".##.\n\
             #..#\n\
             .#.#\n\
             ..#.",
        ),
        (
            "boat",
            "##.\n\
             #.#\n\
             .#.",
        ),
        (
            "toad",
            ".###\n\
             ###.",
        ),
        ("blinker", "###"),
        (
            "beacon",
            "##..\n\
             ##..\n\
             ..##\n\
             ..##",
        ),
        (
            "pulsar",
            "..##.....##..\n\
             ...##...##...\n\
             #..#.#.#.#..#\n\
             ###.##.##.###\n\
             .#.#.#.#.#.#.\n\
             ..###...###..\n\
             .............\n\
             ..###...###..\n\
             .#.#.#.#.#.#.\n\
             ###.##.##.###\n\
             #..#.#.#.#..#\n\
             ...##...##...\n\
             ..##.....##..",
        ),
        (
            "glider",
            ".#.\n\
             ..#\n\
             ###",
        ),
        (
            "lightweight spaceship",
            "..##.\n\
             ##.##\n\
             ####.\n\
             .##..",
        ),
        (
            "r-pentomino",
            ".##\n\
             ##.\n\
             .#.",
        ),
        (
            "diehard",
            "......#.\n\
             ##......\n\
             .#...###",
        ),
        (
            "switch engine",
            "......#.\n\
             ....#.##\n\
             ....#.#.\n\
             ....#...\n\
             ..#.....\n\
             #.#.....",
        ),
        (
            "infinite growth",
            "###.#\n\
             #....\n\
             ...##\n\
             .##.#\n\
             #.#.#",
        ),
    ];

    shapes
        .iter()
        .map(|&(name, art)| Pattern::parse(name, art).expect("pattern literal is malformed"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn check_parse_block() {
        let block = Pattern::parse("block", "##\n##").unwrap();

        assert_eq!(block.name(), "block");
        assert_eq!(block.width(), 2);
        assert_eq!(block.height(), 2);
        assert!(block.get(0, 0));
        assert!(block.get(1, 1));
    }

    #[test]
    fn check_parse_mixed_cells() {
        let glider = Pattern::parse("glider", ".#.\n..#\n###").unwrap();

        assert!(!glider.get(0, 0));
        assert!(glider.get(1, 0));
        assert!(glider.get(2, 1));
        assert!(glider.get(0, 2));
        assert!(glider.get(1, 2));
        assert!(glider.get(2, 2));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank_row("\n")]
    #[case::ragged("##\n#")]
    #[case::ragged_wide("#\n##")]
    #[case::stray_character("#o#")]
    #[case::whitespace("# #")]
    fn check_parse_rejects_malformed(#[case] art: &str) {
        assert_eq!(Pattern::parse("bad", art), None);
    }

    #[test]
    fn check_catalog_inventory() {
        let patterns = catalog();

        let names: Vec<&str> = patterns.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "block",
                "beehive",
                "loaf",
                "boat",
                "toad",
                "blinker",
                "beacon",
                "pulsar",
                "glider",
                "lightweight spaceship",
                "r-pentomino",
                "diehard",
                "switch engine",
                "infinite growth",
            ]
        );

        // Smallest is the 2x2 block, biggest the 13x13 pulsar.
        for pattern in &patterns {
            assert!(pattern.width() >= 2 && pattern.width() <= 13, "{}", pattern.name());
            assert!(pattern.height() >= 1 && pattern.height() <= 13, "{}", pattern.name());
        }
        assert_eq!(patterns[0].width(), 2);
        assert_eq!(patterns[0].height(), 2);
        assert_eq!(patterns[7].width(), 13);
        assert_eq!(patterns[7].height(), 13);
    }

    #[test]
    fn check_blinker_is_one_row() {
        let patterns = catalog();
        let blinker = &patterns[5];

        assert_eq!(blinker.name(), "blinker");
        assert_eq!(blinker.width(), 3);
        assert_eq!(blinker.height(), 1);
        assert!(blinker.get(0, 0));
        assert!(blinker.get(1, 0));
        assert!(blinker.get(2, 0));
    }
}
