pub mod button;
pub mod switch;
pub mod toast;
