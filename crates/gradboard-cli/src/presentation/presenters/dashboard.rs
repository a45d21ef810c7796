use gradboard_runtime::{DashboardSnapshot, Section};

use crate::presentation::view_models::{
    ChartPanelViewModel, CommandResultViewModel, DashboardViewModel, Guidance, SectionViewModel,
    StatusBadge,
};

pub fn present_dashboard(snapshot: DashboardSnapshot) -> CommandResultViewModel<DashboardViewModel> {
    let failures = snapshot.failures().len();

    let charts = snapshot
        .charts
        .into_iter()
        .map(|chart| ChartPanelViewModel {
            id: chart.source.id,
            title: chart.source.title,
            kind: chart.source.kind,
            section: section(chart.outcome),
        })
        .collect();

    let content = DashboardViewModel {
        schools: section(snapshot.schools),
        announcements: section(snapshot.announcements),
        charts,
    };

    let badge = if failures == 0 {
        StatusBadge::success("Dashboard loaded")
    } else {
        StatusBadge::warning(format!("Dashboard loaded with {} failed section(s)", failures))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if failures > 0 {
        result = result.with_suggestion(
            Guidance::new("Show request details").with_command("gradboard --log-level debug dashboard"),
        );
    }
    result
}

fn section<T>(outcome: Section<T>) -> SectionViewModel<T> {
    match outcome {
        Section::Ready(data) => SectionViewModel::Ready { data },
        Section::Failed(err) => SectionViewModel::Failed {
            label: err.label,
            message: err.message,
        },
        Section::Skipped => SectionViewModel::Skipped,
    }
}
