use gradboard_engine::AnnouncementList;

use crate::presentation::view_models::{
    AnnouncementListViewModel, CommandResultViewModel, StatusBadge,
};

pub fn present_announcements(
    announcements: AnnouncementList,
) -> CommandResultViewModel<AnnouncementListViewModel> {
    let badge = StatusBadge::info(format!("{} announcement(s)", announcements.len()));
    CommandResultViewModel::new(AnnouncementListViewModel { announcements }).with_badge(badge)
}
