pub mod board;
pub mod view;

pub use board::{Board, InputMode, Notice, NoticeKind};
pub use view::BoardView;
