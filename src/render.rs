use crate::{
    cells::{CellGraph, CellState},
    data::{Edge, Pos, Side},
    dots::DotGraph,
};

/// Horizontal distance between two dots on the canvas.
const DOT_SPACING: i32 = 4;

/// A fixed-size character grid.
struct Canvas {
    size: Pos,
    chars: Vec<char>,
}

impl Canvas {
    /// A canvas holding `dots` lattice points, all drawn.
    fn with_dots(dots: Pos) -> Self {
        let size = Pos::new((dots.x - 1) * DOT_SPACING + 1, (dots.y - 1) * 2 + 1);
        let mut canvas = Self {
            size,
            chars: vec![' '; (size.x * size.y) as usize],
        };
        for y in 0..dots.y {
            for x in 0..dots.x {
                canvas.put(Canvas::dot(Pos::new(x, y)), '+');
            }
        }
        canvas
    }

    /// Canvas position of the lattice point `dot`.
    fn dot(dot: Pos) -> Pos {
        Pos::new(dot.x * DOT_SPACING, dot.y * 2)
    }

    fn put(&mut self, pos: Pos, c: char) {
        if pos.x >= 0 && pos.x < self.size.x && pos.y >= 0 && pos.y < self.size.y {
            self.chars[(pos.y * self.size.x + pos.x) as usize] = c;
        }
    }

    /// Draw the segment from lattice point `from` one step along `side`.
    fn segment(&mut self, from: Pos, side: Side) {
        let start = Canvas::dot(from);
        match side {
            Side::Top | Side::Bottom => {
                let step = side.offset().y;
                self.put(start + Pos::new(0, step), '|');
            }
            Side::Left | Side::Right => {
                let step = side.offset().x;
                for i in 1..DOT_SPACING {
                    self.put(start + Pos::new(i * step, 0), '-');
                }
            }
        }
    }

    fn finish(self) -> String {
        self.chars
            .chunks(self.size.x as usize)
            .map(|row| row.iter().collect::<String>().trim_end().to_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The dot at the start of a cell edge, and the direction the edge runs from it.
fn cell_edge_segment(edge: Edge) -> (Pos, Side) {
    let corner = edge.cell.pos();
    match edge.side {
        Side::Top => (corner, Side::Right),
        Side::Left => (corner, Side::Bottom),
        Side::Bottom => (corner + Pos::new(0, 1), Side::Right),
        Side::Right => (corner + Pos::new(1, 0), Side::Bottom),
    }
}

/// Drawn walls and enclosed cells (`#`) of a cell board.
pub fn cells_to_string(graph: &CellGraph) -> String {
    let board = graph.board();
    let mut canvas = Canvas::with_dots(board.size() + Pos::ONE);

    for edge in board.edges().filter(|edge| graph.is_drawn(*edge)) {
        let (from, side) = cell_edge_segment(edge);
        canvas.segment(from, side);
    }
    for (index, cell) in board.iter_cells().enumerate() {
        if graph.state(index) == CellState::Enclosed {
            let center = Canvas::dot(cell.pos()) + Pos::new(DOT_SPACING / 2, 1);
            canvas.put(center, '#');
        }
    }
    canvas.finish()
}

/// Drawn lines of a dot lattice.
pub fn dots_to_string(graph: &DotGraph) -> String {
    let board = graph.board();
    let mut canvas = Canvas::with_dots(board.size());

    for line in board.lines().filter(|line| graph.is_drawn(*line)) {
        canvas.segment(line.cell.pos(), line.side);
    }
    canvas.finish()
}
