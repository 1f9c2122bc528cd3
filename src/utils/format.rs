// src/utils/format.rs
use console::Style;

use crate::core::session::{Notice, NoticeKind};
use crate::models::{StrengthLabel, StrengthResult};

const METER_WIDTH: usize = 20;

// Closest 256-color match for each label's meter color
fn label_style(label: StrengthLabel) -> Style {
    let code = match label {
        StrengthLabel::VeryWeak => 203,
        StrengthLabel::Weak => 208,
        StrengthLabel::Regular => 214,
        StrengthLabel::Strong => 148,
        StrengthLabel::VeryStrong => 78,
    };
    Style::new().color256(code)
}

/// Plain meter such as `[############--------]`, scaled like the web bar.
pub fn strength_meter(strength: &StrengthResult) -> String {
    let filled = (strength.percentage() / 100.0 * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

// Colored strength line for terminals
pub fn format_strength(strength: &StrengthResult) -> String {
    let style = label_style(strength.label);
    format!(
        "{} {} ({}/5)",
        style.apply_to(strength_meter(strength)),
        style.apply_to(strength.label).bold(),
        strength.score
    )
}

pub fn format_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✅ {}", Style::new().green().apply_to(&notice.message)),
        NoticeKind::Error => format!("❌ {}", Style::new().red().apply_to(&notice.message)),
        NoticeKind::Info => format!("ℹ️  {}", notice.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_tracks_percentage() {
        let empty = StrengthResult { score: 0, label: StrengthLabel::VeryWeak };
        let full = StrengthResult { score: 5, label: StrengthLabel::Strong };
        let partial = StrengthResult { score: 3, label: StrengthLabel::Regular };

        assert_eq!(strength_meter(&empty), format!("[{}]", "-".repeat(20)));
        assert_eq!(strength_meter(&full), format!("[{}]", "#".repeat(20)));
        assert_eq!(strength_meter(&partial), format!("[{}{}]", "#".repeat(12), "-".repeat(8)));
    }

    #[test]
    fn strength_line_mentions_label_and_score() {
        console::set_colors_enabled(false);
        let line = format_strength(&StrengthResult { score: 2, label: StrengthLabel::Weak });
        assert!(line.contains("Weak"));
        assert!(line.ends_with("(2/5)"));
    }
}
