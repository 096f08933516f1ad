use std::{error::Error, fmt::Display};

/// Why [`Rect::try_new`](crate::rect::Rect::try_new) refused its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectErr {
    NegativeWidth,
    NegativeHeight,
    /// A half-extent was NaN or infinite.
    NonFiniteExtent,
}

impl Display for RectErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for RectErr {}
