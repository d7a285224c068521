// DOM contract of the host page

pub const CANVAS_ID: &str = "gl-canvas";
pub const TRACK_ID: &str = "track";
pub const TITLE_ID: &str = "title";
pub const DESCRIPTION_ID: &str = "description";
pub const BTN_PREV_ID: &str = "btn-prev";
pub const BTN_NEXT_ID: &str = "btn-next";
pub const COUNT_CURRENT_ID: &str = "count-current";
pub const COUNT_TOTAL_ID: &str = "count-total";

// One <li data-src data-title>description</li> per project
pub const PROJECTS_SELECTOR: &str = "#projects li";

// Class toggled on the track while the detail view is open
pub const TRACK_VISIBLE_CLASS: &str = "is-visible";

// Frame rate is logged at debug level this often
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
