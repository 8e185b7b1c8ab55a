// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demos for `pie_chart`.
mod html;
mod svg;

use peniko::color::palette::css;
use pie_chart::{
    Arrangement, Background, Border, ChartConfig, Density, Dimension, Edges, Environment,
    GapPlacement, GradientMode, IconId, IconPlacement, IconProvider, IconRegistry, LabelStyle,
    LabelType, LegendIndicator, LegendPosition, LegendSpec, NoIcons, PieChart, PlanWarning,
    Pointer, Size, SliceSpec, SweepDirection, Symbol, TextDirection,
};
use pie_text::{FontWeight, HeuristicTextMeasurer};

const STAR: IconId = IconId::from_raw(1);
const BOLT: IconId = IconId::from_raw(2);

fn main() {
    let sections = vec![
        basic_demo(),
        donut_demo(),
        outside_rtl_demo(),
        rim_demo(),
        dense_demo(),
    ];

    let html = html::render_report("Pie chart demo", &sections);
    std::fs::write("pie_chart_demo.html", html).expect("write pie_chart_demo.html");
    println!("wrote pie_chart_demo.html");
}

fn render(
    config: ChartConfig,
    size: Size,
    env: &Environment,
    icons: &dyn IconProvider,
) -> String {
    let plan = PieChart::new(config).plan(size, env, &HeuristicTextMeasurer, icons);
    for warning in &plan.warnings {
        match warning {
            PlanWarning::FractionsExceedOne { total } => {
                println!("warning: fractions add up to {total}");
            }
            PlanWarning::LabelsDoNotFit => println!("warning: labels do not fit"),
            PlanWarning::LegendClipped => println!("warning: legend was clipped"),
        }
    }
    svg::SvgDocument::from_plan(&plan).to_svg_string(plan.view)
}

fn icons() -> IconRegistry {
    IconRegistry::new()
        .with_icon(STAR, Size::new(24.0, 24.0))
        .with_icon(BOLT, Size::new(16.0, 24.0))
}

fn basic_demo() -> html::HtmlSection {
    let config = ChartConfig::new(vec![
        SliceSpec::new(0.45).with_label("45%"),
        SliceSpec::new(0.30).with_label("30%"),
        SliceSpec::new(0.25).with_label("25%"),
    ])
    .with_labels(LabelStyle::default().with_color(css::WHITE));

    html::HtmlSection {
        title: "Basic",
        description: "Default palette, hole, overlay and gaps with inside labels.",
        svg: render(
            config,
            Size::new(320.0, 240.0),
            &Environment::default(),
            &NoIcons,
        ),
    }
}

fn donut_demo() -> html::HtmlSection {
    let border = Border::solid(1.0, css::DARK_GRAY)
        .with_corner_radius(6.0)
        .with_dash_pattern("4, 2")
        .expect("valid dash pattern");
    let legend = LegendSpec::new()
        .with_title("Energy mix")
        .with_border(border)
        .with_background(Background::new(css::WHITE_SMOKE).with_corner_radius(6.0))
        .with_paddings(Edges::uniform(Dimension::Dp(8.0)))
        .with_indicator(LegendIndicator::Symbol(Symbol::Square));
    let config = ChartConfig::new(vec![
        SliceSpec::new(0.4)
            .with_color(css::STEEL_BLUE)
            .with_label("Hydro"),
        SliceSpec::new(0.35)
            .with_color(css::GOLD)
            .with_label("Solar"),
        SliceSpec::new(0.25)
            .with_color(css::SEA_GREEN)
            .with_label("Wind"),
    ])
    .with_hole_ratio(0.6)
    .with_overlay(0.0, 0.0)
    .with_gradient(GradientMode::Sweep)
    .with_labels(LabelStyle::default().with_type(LabelType::Invisible))
    .with_legend(legend)
    .with_center_label(
        "100%",
        LabelStyle::default()
            .with_font_size(Dimension::Sp(22.0))
            .with_font_weight(FontWeight::BOLD),
    );

    html::HtmlSection {
        title: "Donut with legend",
        description: "Sweep gradient, bottom legend with a dashed border and a center label.",
        svg: render(
            config,
            Size::new(360.0, 320.0),
            &Environment::default(),
            &NoIcons,
        ),
    }
}

fn outside_rtl_demo() -> html::HtmlSection {
    let config = ChartConfig::new(vec![
        SliceSpec::new(0.5).with_label("نصف"),
        SliceSpec::new(0.3).with_label("ثلث تقريبا"),
        SliceSpec::new(0.2).with_label("خمس"),
    ])
    .with_direction(SweepDirection::CounterClockwise)
    .with_gap(Dimension::Dp(4.0), GapPlacement::PrecedingSlice)
    .with_gradient(GradientMode::Radial)
    .with_labels(LabelStyle::default().with_type(LabelType::Outside))
    .with_legend(LegendSpec::new().with_position(LegendPosition::Start))
    .with_padding(Edges::uniform(Dimension::Dp(8.0)));
    let env = Environment::default().with_text_direction(TextDirection::from_language_tag("ar"));

    html::HtmlSection {
        title: "Outside labels, right-to-left",
        description: "The pie shrinks to fit outside labels; the start legend sits on the right.",
        svg: render(config, Size::new(420.0, 280.0), &env, &NoIcons),
    }
}

fn rim_demo() -> html::HtmlSection {
    let outward = LabelStyle::default()
        .with_type(LabelType::OutsideCircularOutward)
        .with_icon_placement(IconPlacement::End)
        .with_icon_tint(css::DARK_SLATE_GRAY);
    let config = ChartConfig::new(vec![
        SliceSpec::new(0.35)
            .with_label("Stars")
            .with_icon(STAR)
            .with_label_style(outward.clone()),
        SliceSpec::new(0.4)
            .with_label("Bolts")
            .with_icon(BOLT)
            .with_pointer(Pointer::new(12.0, 6.0)),
        SliceSpec::new(0.25)
            .with_label("Other")
            .with_label_style(outward),
    ])
    .with_start_angle(-120)
    .with_labels(LabelStyle::default().with_type(LabelType::OutsideCircularInward))
    .with_legend(
        LegendSpec::new()
            .with_position(LegendPosition::Right)
            .with_arrangement(Arrangement::Vertical),
    );
    let env = Environment::default().with_density(Density::new(1.5, 1.5));

    html::HtmlSection {
        title: "Rim labels with icons",
        description: "Labels follow the rim in both reading directions; one slice has a pointer.",
        svg: render(config, Size::new(480.0, 360.0), &env, &icons()),
    }
}

fn dense_demo() -> html::HtmlSection {
    let slices = (0..12)
        .map(|i| {
            SliceSpec::new(1.0 / 12.0)
                .with_legend_label(format!("Month {}", i + 1))
                .with_legend_icon(if i % 2 == 0 { STAR } else { IconId::from_raw(99) })
        })
        .collect();
    let config = ChartConfig::new(slices)
        .with_hole_ratio(0.0)
        .with_sweep_progress(0.75)
        .with_legend(
            LegendSpec::new()
                .with_position(LegendPosition::Top)
                .with_item_spacing(Dimension::Dp(8.0)),
        );

    html::HtmlSection {
        title: "Wrapping legend",
        description: "Twelve slices drawn three quarters of the way; the legend wraps and \
                      unknown icons fall back to swatches.",
        svg: render(
            config,
            Size::new(360.0, 360.0),
            &Environment::default(),
            &icons(),
        ),
    }
}
