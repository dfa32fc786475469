//! Certificate export: the rendered results region is captured through the
//! egui screenshot command, cropped to the certificate rect and encoded as a
//! PNG next to the binary. From GameOver the Results region is rendered
//! first, captured, then discarded, in that strict order.

use std::fmt;
use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, Event, UserData, ViewportCommand};

use super::QuizApp;
use crate::model::Screen;

#[derive(Debug)]
pub enum ExportError {
    /// The certificate region was never rendered this frame.
    MissingTarget,
    /// Cropping, encoding or writing the PNG failed.
    Encode(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingTarget => write!(f, "certificate region was not rendered"),
            ExportError::Encode(msg) => write!(f, "could not encode certificate: {msg}"),
        }
    }
}

/// One export in flight. `render_results` forces the Results region onto the
/// frame when the export was requested from GameOver.
pub struct ExportJob {
    pub render_results: bool,
    pub screenshot_sent: bool,
}

impl QuizApp {
    pub fn is_exporting(&self) -> bool {
        self.export_job.is_some()
    }

    pub fn can_export(&self) -> bool {
        matches!(self.session.screen, Screen::Results | Screen::GameOver) && !self.is_exporting()
    }

    /// Starts an export unless one is already running (at most one in
    /// flight; concurrent requests are rejected).
    pub fn request_export(&mut self) {
        if !self.can_export() {
            return;
        }
        self.export_job = Some(ExportJob {
            render_results: self.session.screen == Screen::GameOver,
            screenshot_sent: false,
        });
    }

    /// True while an export needs the Results region on screen instead of
    /// the session's real screen.
    pub fn export_wants_results_render(&self) -> bool {
        self.export_job.as_ref().is_some_and(|job| job.render_results)
    }

    /// Runs after the frame's views so the capture sees the certificate
    /// fully rendered.
    pub fn maybe_request_screenshot(&mut self, ctx: &Context) {
        if let Some(job) = &mut self.export_job {
            if !job.screenshot_sent {
                ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
                job.screenshot_sent = true;
                ctx.request_repaint();
            }
        }
    }

    /// Consumes a screenshot event, writes the certificate and clears the
    /// busy state. Failures surface as a visible notice and never touch the
    /// session counters.
    pub fn handle_screenshot_events(&mut self, ctx: &Context) {
        let image = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = image else { return };
        if self.export_job.is_none() {
            // Stale capture from a cancelled export.
            return;
        }

        let result = self.write_certificate(&image, ctx.pixels_per_point());
        // Discard the off-screen render; the real screen returns next frame.
        self.export_job = None;

        match result {
            Ok(path) => {
                log::info!("certificate saved to {}", path.display());
                self.message = format!("تم حفظ الشهادة: {}", path.display());
            }
            Err(err) => {
                log::error!("certificate export failed: {err}");
                self.message = "حدث خطأ أثناء تصدير الملف. حاول مرة أخرى.".into();
            }
        }
    }

    fn write_certificate(
        &self,
        image: &ColorImage,
        pixels_per_point: f32,
    ) -> Result<PathBuf, ExportError> {
        let rect = self.certificate_rect.ok_or(ExportError::MissingTarget)?;
        let cropped = image.region(&rect, Some(pixels_per_point));
        let path = PathBuf::from(export_file_name(&self.session.student_name));
        save_png(&cropped, &path)?;
        Ok(path)
    }
}

/// `quiz-results-<name>.png`, whitespace runs collapsed to `-`, empty name
/// falling back to `student`.
pub fn export_file_name(student_name: &str) -> String {
    let slug = student_name.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        "quiz-results-student.png".to_owned()
    } else {
        format!("quiz-results-{slug}.png")
    }
}

fn save_png(image: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let [width, height] = image.size;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for pixel in &image.pixels {
        rgba.extend_from_slice(&pixel.to_srgba_unmultiplied());
    }
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or_else(|| ExportError::Encode("pixel buffer size mismatch".into()))?;
    buffer
        .save(path)
        .map_err(|err| ExportError::Encode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(
            export_file_name("Monther  Al Khalayleh"),
            "quiz-results-Monther-Al-Khalayleh.png"
        );
    }

    #[test]
    fn file_name_falls_back_for_blank_names() {
        assert_eq!(export_file_name(""), "quiz-results-student.png");
        assert_eq!(export_file_name("   "), "quiz-results-student.png");
    }

    #[test]
    fn file_name_keeps_non_ascii_names() {
        assert_eq!(export_file_name("سارة أحمد"), "quiz-results-سارة-أحمد.png");
    }
}
