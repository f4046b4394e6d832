mod canvas;
mod notice;
mod toolbar;

pub use canvas::{central_panel, paint_shapes};
pub use notice::{notice_window, Notice, NoticeKind};
pub use toolbar::toolbar;
