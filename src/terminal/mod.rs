pub mod key;
pub mod terminal;

pub use key::Key;
pub use terminal::{Size, Terminal, TerminalEvent};
