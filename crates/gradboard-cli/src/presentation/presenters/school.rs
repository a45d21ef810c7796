use gradboard_engine::TablePage;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SchoolPageViewModel, StatusBadge,
};

pub fn present_school_page(table: TablePage) -> CommandResultViewModel<SchoolPageViewModel> {
    let in_range = table.page >= 1 && table.page <= table.total_pages;

    let badge = if table.total_count == 0 {
        StatusBadge::warning("No schools returned")
    } else if !in_range {
        StatusBadge::warning(format!(
            "Page {} is out of range (1-{})",
            table.page, table.total_pages
        ))
    } else {
        StatusBadge::info(format!(
            "Page {} of {} ({} schools)",
            table.page, table.total_pages, table.total_count
        ))
    };

    let next = table
        .pagination
        .as_ref()
        .filter(|layout| !layout.next.disabled)
        .map(|layout| layout.next.target);
    let out_of_range = (!in_range && table.total_pages > 0).then_some(table.total_pages);

    let mut result =
        CommandResultViewModel::new(SchoolPageViewModel { table }).with_badge(badge);

    if let Some(target) = next {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(format!("gradboard schools --page {}", target)),
        );
    }
    if let Some(last) = out_of_range {
        result = result.with_suggestion(
            Guidance::new("Last page").with_command(format!("gradboard schools --page {}", last)),
        );
    }

    result
}
