use std::error::Error;

use center_rect::debug::{verdict, COLOR_BLUE, COLOR_ORANGE};
use center_rect::{dbg_points, dbg_rect, dbg_rects, emit_info};
use center_rect::{Center, Point, Rect};
use procr_ansi_term::Style;
use tracing::info;

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .pretty()
        // enable everything
        .with_max_level(tracing::Level::TRACE)
        // sets this to be the default, global collector for this application.
        .init();

    let area = Rect::try_new(Center::new(Point::new(61.0, 95.6)), 30.0, 15.1)?;
    emit_info!(sty:Style::new().bold().fg(COLOR_ORANGE), fmt:"query area: {:?}" | area);

    let points: Vec<Point> = (0..12)
        .flat_map(|i| (0..12).map(move |j| Point::new(i as f64 * 10.0, j as f64 * 10.0)))
        .collect();
    let found: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| area.contains(p))
        .collect();
    info!(
        "{} of {} grid points inside {:?}: {:?}",
        found.len(),
        points.len(),
        dbg_rect!(&area),
        dbg_points!(&found)
    );

    let shared = Center::new(Point::new(0.0, 0.0));
    let mut mover = Rect::try_new(shared.clone(), 2.0, 1.0)?;
    let probe = Point::new(5.0, 0.0);
    info!(
        "{:?} contains {}? {}",
        dbg_rect!(&mover),
        probe,
        verdict(mover.contains(&probe))
    );
    mover.set_x(5.0);
    emit_info!(sty:Style::new().fg(COLOR_BLUE), fmt:"moved rect, shared center is now {:?}" | shared.get());
    info!(
        "{:?} contains {}? {}",
        dbg_rect!(&mover),
        probe,
        verdict(mover.contains(&probe))
    );

    let others = vec![
        Rect::from_xywh(5.0, 0.0, 2.0, 1.0),
        Rect::from_xywh(8.0, 0.0, 1.0, 1.0),
        Rect::from_xywh(20.0, 20.0, 1.0, 1.0),
    ];
    info!("checking overlaps against {:?}", dbg_rects!(&others));
    let hits = others
        .iter()
        .filter(|other| {
            let hit = mover.intersects(other);
            info!("{:?} intersects? {}", dbg_rect!(other), verdict(hit));
            hit
        })
        .count();

    println!(
        "{} points in {}, {} of {} rects overlap {}",
        found.len(),
        area,
        hits,
        others.len(),
        mover
    );
    Ok(())
}
