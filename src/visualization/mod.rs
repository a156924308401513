mod terminal;

pub use terminal::{draw_board, render_board};
