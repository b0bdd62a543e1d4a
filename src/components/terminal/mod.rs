mod hooks;
mod input;
mod output;
mod snake;
mod terminal;

pub use input::Input;
pub use output::{Output, OutputLine};
pub use snake::SnakeView;
pub use terminal::Terminal;
