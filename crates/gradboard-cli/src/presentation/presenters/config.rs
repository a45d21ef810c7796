use gradboard_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(config: Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if !exists {
        result = result.with_suggestion(
            Guidance::new("Write these defaults to disk").with_command("gradboard config init"),
        );
    }
    result
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Config overwritten with defaults"
    } else {
        "Config written"
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(Guidance::new("Check the effective settings").with_command("gradboard config show"))
}
