pub mod gradient;
pub mod preview;
pub mod styles;
pub mod text;
