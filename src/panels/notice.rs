use egui::{Align2, Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user has to acknowledge before doing anything else
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Message",
            NoticeKind::Error => "Error",
        }
    }
}

/// Show the pending notice, if any, and clear it once dismissed
pub fn notice_window(notice: &mut Option<Notice>, ctx: &egui::Context) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(current.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let text = RichText::new(&current.message);
            match current.kind {
                NoticeKind::Info => ui.label(text),
                NoticeKind::Error => ui.label(text.color(Color32::RED)),
            };
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        *notice = None;
    }
}
