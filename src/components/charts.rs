//! Chart components for the analysis section
//!
//! Both charts are laid out with plain divs: points and bars are absolutely
//! positioned inside the plot area using the unit-square coordinates the
//! chart models produce. A row of transparent columns over the plot area
//! tracks the hovered date.

use crate::app::TickerboardApp;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use tickerboard_core::format::{format_fixed, Tone};
use tickerboard_core::view::{LineSeries, LineStyle, PriceChart, ReturnsChart};

const PLOT_HEIGHT: f32 = 220.0;
const PLOT_INSET: f32 = 10.0;

/// Which chart a hover event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Price,
    Returns,
}

pub fn price_chart(
    theme: &Theme,
    chart: &PriceChart,
    hovered: Option<usize>,
    cx: &mut Context<TickerboardApp>,
) -> impl IntoElement {
    let (lo, hi) = chart.value_range().unwrap_or((0.0, 0.0));
    let hover_text = hovered
        .and_then(|i| chart.hover_label(i))
        .unwrap_or_else(|| chart.x_title.to_string());

    chart_frame(theme, chart.title)
        .child(
            div()
                .flex()
                .gap(px(16.0))
                .child(legend_entry(theme, chart.close.name, chart.close.style, theme.series_primary))
                .child(legend_entry(
                    theme,
                    chart.moving_average.name,
                    chart.moving_average.style,
                    theme.series_secondary,
                )),
        )
        .child(
            div()
                .flex()
                .gap(px(8.0))
                .child(y_axis(theme, chart.y_title, &format_fixed(hi, 2), &format_fixed(lo, 2)))
                .child(
                    plot_area(theme)
                        .child(
                            div()
                                .absolute()
                                .top(px(PLOT_INSET))
                                .bottom(px(PLOT_INSET))
                                .left(px(PLOT_INSET))
                                .right(px(PLOT_INSET))
                                .children(line_points(chart, &chart.moving_average, theme.series_secondary))
                                .children(line_points(chart, &chart.close, theme.series_primary)),
                        )
                        .child(hover_columns(theme, ChartKind::Price, chart.len(), hovered, cx)),
                ),
        )
        .child(x_footer(theme, hover_text))
}

pub fn returns_chart(
    theme: &Theme,
    chart: &ReturnsChart,
    hovered: Option<usize>,
    cx: &mut Context<TickerboardApp>,
) -> impl IntoElement {
    let max = chart.max_magnitude();
    let hover_text = hovered
        .and_then(|i| chart.hover_label(i))
        .unwrap_or_else(|| chart.x_title.to_string());

    let bars = (0..chart.len()).map(|i| {
        let bar = &chart.bars[i];
        let extent = chart.bar_extent(i) * 0.5;
        let color = match bar.tone {
            Tone::Positive => theme.positive,
            Tone::Negative => theme.negative,
        };

        div().flex_1().h_full().relative().child(
            div()
                .absolute()
                .left(px(1.0))
                .right(px(1.0))
                .h(relative(extent))
                .bg(color)
                .map(|el| match bar.tone {
                    Tone::Positive => el.bottom(relative(0.5)).rounded_t(px(2.0)),
                    Tone::Negative => el.top(relative(0.5)).rounded_b(px(2.0)),
                }),
        )
    });

    chart_frame(theme, chart.title)
        .child(legend_entry(theme, chart.series_name, LineStyle::Solid, theme.positive))
        .child(
            div()
                .flex()
                .gap(px(8.0))
                .child(y_axis(
                    theme,
                    chart.y_title,
                    &format_fixed(max, 2),
                    &format_fixed(-max, 2),
                ))
                .child(
                    plot_area(theme)
                        // zero line
                        .child(
                            div()
                                .absolute()
                                .left_0()
                                .right_0()
                                .top(relative(0.5))
                                .h(px(1.0))
                                .bg(theme.border),
                        )
                        .child(
                            div()
                                .absolute()
                                .top(px(PLOT_INSET))
                                .bottom(px(PLOT_INSET))
                                .left(px(PLOT_INSET))
                                .right(px(PLOT_INSET))
                                .flex()
                                .children(bars),
                        )
                        .child(hover_columns(theme, ChartKind::Returns, chart.len(), hovered, cx)),
                ),
        )
        .child(x_footer(theme, hover_text))
}

fn chart_frame(theme: &Theme, title: &'static str) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(12.0))
        .p(px(20.0))
        .rounded(px(10.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .child(
            div()
                .text_size(px(15.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(title),
        )
}

fn plot_area(theme: &Theme) -> Div {
    div()
        .flex_grow()
        .relative()
        .h(px(PLOT_HEIGHT))
        .rounded(px(6.0))
        .bg(theme.card_bg_elevated)
        .overflow_hidden()
}

fn line_points(chart: &PriceChart, line: &LineSeries, color: Hsla) -> Vec<Div> {
    let (size, opacity) = match line.style {
        LineStyle::Solid => (5.0, 1.0),
        LineStyle::Dashed => (4.0, 0.7),
    };

    chart
        .plot(line)
        .into_iter()
        .flatten()
        .map(|(x, y)| {
            div()
                .absolute()
                .left(relative(x))
                .bottom(relative(y))
                .ml(px(-size / 2.0))
                .mb(px(-size / 2.0))
                .size(px(size))
                .rounded_full()
                .bg(color.opacity(opacity))
        })
        .collect()
}

fn hover_columns(
    theme: &Theme,
    kind: ChartKind,
    count: usize,
    hovered: Option<usize>,
    cx: &mut Context<TickerboardApp>,
) -> impl IntoElement {
    let id = match kind {
        ChartKind::Price => "price-col",
        ChartKind::Returns => "returns-col",
    };
    let highlight = theme.accent_glow;

    div()
        .absolute()
        .inset_0()
        .px(px(PLOT_INSET))
        .flex()
        .children((0..count).map(|i| {
            div()
                .id((id, i))
                .flex_1()
                .h_full()
                .when(hovered == Some(i), |el| el.bg(highlight))
                .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
                    this.set_chart_hover(kind, i, *hovered, cx);
                }))
        }))
}

fn legend_entry(theme: &Theme, name: &'static str, style: LineStyle, color: Hsla) -> impl IntoElement {
    let swatch = match style {
        LineStyle::Solid => div().w(px(18.0)).h(px(3.0)).rounded(px(2.0)).bg(color),
        LineStyle::Dashed => div()
            .flex()
            .gap(px(3.0))
            .children((0..3).map(|_| div().w(px(4.0)).h(px(3.0)).bg(color))),
    };

    div()
        .flex()
        .items_center()
        .gap(px(6.0))
        .child(swatch)
        .child(
            div()
                .text_size(px(11.0))
                .text_color(theme.text_secondary)
                .child(name),
        )
}

fn y_axis(theme: &Theme, title: &'static str, top: &str, bottom: &str) -> impl IntoElement {
    div()
        .w(px(64.0))
        .h(px(PLOT_HEIGHT))
        .flex()
        .flex_col()
        .justify_between()
        .items_end()
        .text_size(px(10.0))
        .text_color(theme.text_dimmed)
        .child(top.to_string())
        .child(div().text_color(theme.text_muted).child(title))
        .child(bottom.to_string())
}

fn x_footer(theme: &Theme, text: String) -> impl IntoElement {
    div()
        .pl(px(72.0))
        .text_size(px(11.0))
        .text_color(theme.text_muted)
        .child(text)
}
