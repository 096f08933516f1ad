use itertools::Itertools;
use procr_ansi_term::{Color, Style};
use std::fmt;

use crate::{point::Point, rect::Rect};

pub const STYLE_TYPE_NAME: Style = Style::new().bold().fg(Color::Purple);
pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);
pub const STYLE_ITEM: Style = Style::new().fg(Color::Cyan);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const STYLE_HIT: Style = Style::new().bold().fg(COLOR_GREEN);
pub const STYLE_MISS: Style = Style::new().fg(Color::Red);

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

#[macro_export]
macro_rules! dbg_rect {
    ($rect:expr) => {
        $crate::debug::debug_with($crate::debug::debug_rect($rect))
    };
}

pub fn debug_rect(rect: &Rect) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(f, "{}", STYLE_TYPE_NAME.paint("R"))?;
        write!(f, "{}", STYLE_ITEM.paint(format!("{:?}", rect.center().get())))?;
        write!(
            f,
            "{}",
            STYLE_LABEL.paint(format!("±({},{})", rect.width, rect.height))
        )
    }
}

#[macro_export]
macro_rules! dbg_rects {
    ($rects:expr) => {
        $crate::debug::debug_with($crate::debug::debug_rects($rects))
    };
}

pub fn debug_rects(rects: &[Rect]) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(
            f,
            "[{}]",
            rects
                .iter()
                .map(|rect| format!("{:?}", debug_with(debug_rect(rect))))
                .join(", ")
        )
    }
}

#[macro_export]
macro_rules! dbg_points {
    ($points:expr) => {
        $crate::debug::debug_with($crate::debug::debug_points($points))
    };
}

pub fn debug_points(points: &[Point]) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(
            f,
            "[{}]",
            points
                .iter()
                .map(|p| STYLE_ITEM.paint(p.to_string()).to_string())
                .join(",")
        )
    }
}

/// Paints a yes/no answer of a geometric test.
pub fn verdict(hit: bool) -> String {
    if hit {
        STYLE_HIT.paint("yes").to_string()
    } else {
        STYLE_MISS.paint("no").to_string()
    }
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}
