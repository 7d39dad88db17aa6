// src/report/charts.rs
//
// SVG charts via plotters, dark theme. The caller embeds them in HTML.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::consts::{FALLBACK_COLORS, OWNER_COLORS};
use crate::error::ReportError;

use super::aggregate::Standings;

pub const LINE_TITLE: &str = "Domestic Box Office per Owner Over Time";
pub const BAR_TITLE: &str = "Worldwide Gross per Owner";
pub const CHART_SIZE: (u32, u32) = (1400, 700);

fn chart_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(e.to_string())
}

fn text_style(size: u32) -> TextStyle<'static> {
    ("sans-serif", size).into_font().color(&WHITE)
}

/// "#FFA500" → RGB. Malformed → grey.
pub fn hex_color(hex: &str) -> RGBColor {
    let h = hex.trim_start_matches('#');
    let channel = |i: usize| h.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
    match (h.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => RGBColor(r, g, b),
        _ => RGBColor(128, 128, 128),
    }
}

/// League palette first; everyone else gets a fallback slot by position.
pub fn owner_color(owner: &str, index: usize) -> RGBColor {
    OWNER_COLORS
        .iter()
        .find(|(name, _)| *name == owner)
        .map(|(_, hex)| hex_color(hex))
        .unwrap_or_else(|| hex_color(FALLBACK_COLORS[index % FALLBACK_COLORS.len()]))
}

/// `owner_color` as plain channels, for callers outside plotters.
pub fn owner_rgb(owner: &str, index: usize) -> (u8, u8, u8) {
    let RGBColor(r, g, b) = owner_color(owner, index);
    (r, g, b)
}

/// 1_234_000_000 → "$1.2B", 415_000_000 → "$415M", 12_500 → "$13K".
pub fn compact_dollars(v: i64) -> String {
    let f = v as f64;
    match v.unsigned_abs() {
        n if n >= 1_000_000_000 => format!("${:.1}B", f / 1e9),
        n if n >= 1_000_000 => format!("${:.0}M", f / 1e6),
        n if n >= 1_000 => format!("${:.0}K", f / 1e3),
        _ => format!("${v}"),
    }
}

fn y_ceiling(max: i64) -> i64 {
    (max.max(0) as f64 * 1.08) as i64 + 1
}

/// Cumulative domestic gross per owner, one line each, legend in ranking order.
pub fn line_chart_svg(standings: &Standings, size: (u32, u32)) -> Result<String, ReportError> {
    let days = &standings.days;
    // two spare days past the last one so the end markers are not clipped
    let x_end = days.len() as i32 + 2;
    let y_max = y_ceiling(standings.owners.iter().map(|o| o.latest()).max().unwrap_or(0));

    let x_fmt = |x: &i32| {
        usize::try_from(*x)
            .ok()
            .and_then(|i| days.get(i))
            .map(|d| d.format("%b %d").to_string())
            .unwrap_or_default()
    };
    let y_fmt = |v: &i64| compact_dollars(*v);

    let mut buf = s!();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&BLACK).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(LINE_TITLE, text_style(28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(0i32..x_end, 0i64..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Box Office ($)")
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style(text_style(16))
            .axis_desc_style(text_style(18))
            .axis_style(&WHITE)
            .bold_line_style(&WHITE.mix(0.15))
            .light_line_style(&WHITE.mix(0.05))
            .draw()
            .map_err(chart_err)?;

        for (i, o) in standings.owners.iter().enumerate() {
            let color = owner_color(&o.owner, i);
            let points: Vec<(i32, i64)> = o
                .cumulative
                .iter()
                .enumerate()
                .map(|(x, v)| (x as i32, *v))
                .collect();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(4)).point_size(5))
                .map_err(chart_err)?
                .label(o.owner.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(4)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(text_style(18))
            .background_style(&BLACK.mix(0.6))
            .border_style(&WHITE)
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(buf)
}

/// One bar per owner with at least one movie, tallest first, owner name and
/// total above each bar.
pub fn bar_chart_svg(standings: &Standings, size: (u32, u32)) -> Result<String, ReportError> {
    let bars: Vec<_> = standings.by_worldwide().into_iter().filter(|o| o.movies > 0).collect();
    let n = bars.len().max(1) as f64;
    let y_max = y_ceiling(bars.iter().map(|o| o.worldwide).max().unwrap_or(0));
    let y_fmt = |v: &i64| compact_dollars(*v);
    let no_x_labels = |_: &f64| s!();

    let mut buf = s!();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&BLACK).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(BAR_TITLE, text_style(28))
            .margin(20)
            .x_label_area_size(30)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..n, 0i64..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Owner")
            .y_desc("Worldwide Gross ($)")
            .x_label_formatter(&no_x_labels)
            .y_label_formatter(&y_fmt)
            .label_style(text_style(16))
            .axis_desc_style(text_style(18))
            .axis_style(&WHITE)
            .bold_line_style(&WHITE.mix(0.15))
            .light_line_style(&WHITE.mix(0.05))
            .draw()
            .map_err(chart_err)?;

        // palette slot follows the ranking so colors match the line chart
        let slot = |owner: &str| standings.owners.iter().position(|o| o.owner == owner).unwrap_or(0);

        chart
            .draw_series(bars.iter().enumerate().map(|(i, o)| {
                let x = i as f64;
                Rectangle::new(
                    [(x + 0.15, 0), (x + 0.85, o.worldwide)],
                    owner_color(&o.owner, slot(&o.owner)).filled(),
                )
            }))
            .map_err(chart_err)?;

        let label_style = text_style(16).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(bars.iter().enumerate().map(|(i, o)| {
                Text::new(
                    format!("{} {}", o.owner, compact_dollars(o.worldwide)),
                    (i as f64 + 0.5, o.worldwide),
                    label_style.clone(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(buf)
}
