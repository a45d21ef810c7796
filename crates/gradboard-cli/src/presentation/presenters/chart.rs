use gradboard_engine::ChartOption;
use gradboard_runtime::{ChartSource, Config};

use crate::presentation::view_models::{
    ChartEntryViewModel, ChartListViewModel, ChartViewModel, CommandResultViewModel, Guidance,
    StatusBadge,
};

pub fn present_chart(
    source: &ChartSource,
    option: ChartOption,
) -> CommandResultViewModel<ChartViewModel> {
    let mut result = CommandResultViewModel::new(ChartViewModel {
        id: source.id.clone(),
        title: source.title.clone(),
        kind: option.kind,
        endpoint: source.endpoint.clone(),
        option,
    });

    if !source.enabled {
        result = result.with_badge(StatusBadge::warning(format!(
            "Chart `{}` is disabled in the dashboard",
            source.id
        )));
    }

    result
        .with_suggestion(Guidance::new("Raw option object").with_command(format!(
            "gradboard --format json chart {}",
            source.id
        )))
}

pub fn present_chart_list(config: &Config) -> CommandResultViewModel<ChartListViewModel> {
    let charts = config
        .charts
        .iter()
        .map(|chart| ChartEntryViewModel {
            id: chart.id.clone(),
            title: chart.title.clone(),
            kind: chart.kind,
            endpoint: chart.endpoint.clone(),
            enabled: chart.enabled,
        })
        .collect::<Vec<_>>();

    let mut result = CommandResultViewModel::new(ChartListViewModel { charts });
    if let Some(first) = config.enabled_charts().next() {
        result = result.with_suggestion(
            Guidance::new("Fetch one chart").with_command(format!("gradboard chart {}", first.id)),
        );
    }
    result
}
