pub mod controls;
pub mod glyphs;
pub mod help;
pub mod keypad;
pub mod timer;
