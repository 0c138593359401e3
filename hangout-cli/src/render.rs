//! Terminal rendering for event pages.

use hangout_core::image::DataUrl;
use hangout_core::{EventView, ViewState};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ViewState {
    fn render(&self) -> String {
        match self {
            ViewState::Loading => "Loading...".dimmed().to_string(),
            ViewState::Error(e) => format!("  {}", e.to_string().red()),
            ViewState::Loaded(view) => view.render(),
        }
    }
}

impl Render for EventView {
    fn render(&self) -> String {
        let record = &self.record;
        let mut lines = vec![
            format!("  {}", "Let's Hang".dimmed()),
            format!("  {}", record.event_name.bold()),
            String::new(),
            field_line("When", &record.date_time.to_string()),
            field_line("Where", &record.location),
            field_line("Cost", &record.cost),
            field_line("Phone", &record.phone),
        ];

        if self.show_capacity {
            lines.push(field_line("Capacity", record.capacity_text()));
        }

        lines.push(String::new());
        lines.extend(record.description.lines().map(|l| format!("  {}", l)));

        if self.show_links {
            lines.push(String::new());
            lines.push(format!("  {}", "Links".bold()));
            for (i, link) in record.links.iter().enumerate() {
                lines.push(format!("  {} {}", format!("{}.", i + 1).dimmed(), link.cyan()));
            }
        }

        let images = [
            ("Photo", record.image.as_deref()),
            ("Background", record.background_image.as_deref()),
        ];
        if images.iter().any(|(_, img)| img.is_some()) {
            lines.push(String::new());
            for (label, img) in images {
                if let Some(img) = img {
                    lines.push(field_line(label, &describe_image(img)));
                }
            }
        }

        lines.join("\n")
    }
}

fn field_line(label: &str, value: &str) -> String {
    format!("  {:<10} {}", format!("{}:", label).dimmed(), value)
}

/// "image/png, 12.3 KB", or a note when the stored value is not a data URL.
fn describe_image(data_url: &str) -> String {
    match DataUrl::parse(data_url) {
        Ok(image) => format!("{}, {}", image.mime, human_size(image.bytes.len())),
        Err(_) => "unreadable image".to_string(),
    }
}

fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
