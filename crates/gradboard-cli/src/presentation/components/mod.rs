mod school_browser;

pub use school_browser::{BrowseAction, SchoolBrowser};
