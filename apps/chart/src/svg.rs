//! SVG rendering for the proportional cost chart.
//!
//! One horizontal bar per asset line on a dark background, with the
//! ticker and declared value to the left of the plot area and the
//! percentage and allocated cost to the right, title on the top left.

use std::fs;
use std::path::Path;

use log::debug;
use rust_decimal::prelude::ToPrimitive;

use rateio_core::errors::{Error, Result};
use rateio_core::formatting::{format_amount, format_amount_no_decimals, format_percent};

use crate::data::ChartData;

const BACKGROUND: &str = "#151b24";
const BAR_OUTLINE: &str = "#0f1218";
const TEXT_COLOR: &str = "#E6E6E6";
const PALETTE: [&str; 4] = ["#2F6BFF", "#40B24D", "#F2B01E", "#D63C3C"];

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 90.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Renders the chart as an SVG document string.
pub fn render_chart(chart: &ChartData, width: u32, height: u32) -> String {
    let max_value = chart
        .items
        .iter()
        .map(|item| item.value)
        .max()
        .unwrap_or_default()
        .to_f64()
        .unwrap_or(0.0);

    // Asymmetric padding reserves room for the labels on both sides of
    // the bars, as fractions of the longest bar.
    let left_pad = max_value * 0.55;
    let right_pad = max_value * 0.65;
    let x_min = -left_pad;
    let x_max = max_value + right_pad;
    let x_left = x_min + left_pad * 0.08;
    let x_right = max_value + right_pad * 0.05;

    let span = if x_max - x_min > 0.0 { x_max - x_min } else { 1.0 };
    let plot_width = width as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let to_px = |value: f64| MARGIN_LEFT + (value - x_min) / span * plot_width;

    let row_height = plot_height / chart.items.len() as f64;
    let bar_height = row_height * 0.7;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"{BACKGROUND}\"/>\n"
    ));

    let title = xml_escape(&format!(
        "Total: {} -> Custo Total: {}",
        format_amount(chart.total_value),
        format_amount(chart.custo_total)
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"40\" font-family=\"sans-serif\" font-size=\"20\" \
         fill=\"{TEXT_COLOR}\">{title}</text>\n",
        width as f64 * 0.02
    ));

    for (i, item) in chart.items.iter().enumerate() {
        let value = item.value.to_f64().unwrap_or(0.0);
        let y_center = MARGIN_TOP + (i as f64 + 0.5) * row_height;
        let bar_y = y_center - bar_height / 2.0;
        let x0 = to_px(value.min(0.0));
        let x1 = to_px(value.max(0.0));

        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
             fill=\"{}\" stroke=\"{BAR_OUTLINE}\" stroke-width=\"1.5\"/>\n",
            x0,
            bar_y,
            x1 - x0,
            bar_height,
            PALETTE[i % PALETTE.len()]
        ));

        let left_label = xml_escape(&format!(
            "{} ({})",
            item.ticker,
            format_amount_no_decimals(item.value)
        ));
        let right_label = xml_escape(&format!(
            "{} -> Custo: {}",
            format_percent(item.percent),
            format_amount(item.cost)
        ));

        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"18\" \
             fill=\"{TEXT_COLOR}\" dominant-baseline=\"middle\">{left_label}</text>\n",
            to_px(x_left),
            y_center
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"18\" \
             fill=\"{TEXT_COLOR}\" dominant-baseline=\"middle\">{right_label}</text>\n",
            to_px(x_right),
            y_center
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders the chart and writes it to `path`, creating parent
/// directories as needed.
pub fn write_chart(chart: &ChartData, path: &Path, width: u32, height: u32) -> Result<()> {
    let svg = render_chart(chart, width, height);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                Error::ResourceUnavailable(format!("cannot create {}: {err}", parent.display()))
            })?;
        }
    }
    fs::write(path, svg).map_err(|err| {
        Error::ResourceUnavailable(format!("cannot write {}: {err}", path.display()))
    })?;

    debug!("chart rendered to {}", path.display());
    Ok(())
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
