use std::path::Path;

use clap::Parser;

use crate::application::Pipeline;
use crate::domain::error::Result;
use crate::domain::store::Dimension;
use crate::infrastructure::config::Settings;
use crate::infrastructure::render;
use crate::interfaces::cli::Cli;

pub fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let cli = Cli::parse();

    let mut settings = Settings::from_file(Path::new(&cli.config))?;
    cli.apply_overrides(&mut settings);
    settings.ensure_valid()?;

    let outcome = Pipeline::new(settings.clone()).run()?;

    tracing::info!("{}", outcome.report.summary());
    for (field, missing) in &outcome.report.missing_by_field {
        if *missing > 0 {
            tracing::debug!("Field {} absent in {} rows", field, missing);
        }
    }

    let target = settings.normalized_target_country();
    for dimension in [Dimension::Province, Dimension::Ownership] {
        for entry in outcome.subset_stats(dimension) {
            tracing::info!(
                "{} by {}: {} - {} stores ({}%)",
                target,
                dimension,
                entry.key,
                entry.count,
                entry.percentage
            );
        }
    }

    if !cli.no_charts {
        let charts_dir = render::ensure_charts_dir(&settings.charts_dir)?;
        render::draw_bar_chart(
            &charts_dir.join("top_countries.png"),
            "Top countries by store count",
            &outcome.cleaned_by_country,
            settings.top_n,
        )?;
        render::draw_bar_chart(
            &charts_dir.join("top_cities.png"),
            "Top cities by store count",
            &outcome.cleaned_by_city,
            settings.top_n,
        )?;
        render::draw_horizontal_bar_chart(
            &charts_dir.join(format!("top_cities_{}.png", target.to_lowercase())),
            &format!("Top {} cities by store count", target),
            outcome.subset_stats(Dimension::City),
            settings.top_n,
        )?;
    }

    tracing::info!("{}", outcome.summary.format());
    Ok(())
}
