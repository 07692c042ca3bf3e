use std::{collections::HashMap, io};

use akil_core_board_contracts::board::JobCardView;
use akil_models::job::JobDetail;

/// Explicit category-to-color mapping owned by the presentation layer.
/// Known categories have fixed colors; everything else gets a palette color
/// derived from the category name, so the assignment is stable across runs.
#[derive(Debug, Clone)]
pub struct CategoryStyleMap {
    fixed: HashMap<String, AnsiColor>,
    palette: Vec<AnsiColor>,
}

impl Default for CategoryStyleMap {
    fn default() -> Self {
        Self {
            fixed: [
                ("education".into(), AnsiColor::Yellow),
                ("it".into(), AnsiColor::Blue),
            ]
            .into(),
            palette: vec![
                AnsiColor::Green,
                AnsiColor::Red,
                AnsiColor::Magenta,
                AnsiColor::Cyan,
            ],
        }
    }
}

impl CategoryStyleMap {
    /// Lookup is case-insensitive on the category name.
    pub fn style(&self, category: &str) -> AnsiColor {
        let key = category.to_lowercase();
        if let Some(&color) = self.fixed.get(&key) {
            return color;
        }
        self.palette[fnv1a(&key) as usize % self.palette.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Yellow,
    Blue,
    Green,
    Red,
    Magenta,
    Cyan,
}

impl AnsiColor {
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}\x1b[0m", self.code())
    }

    fn code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
        }
    }
}

fn fnv1a(s: &str) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in s.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

pub fn write_card_list(
    out: &mut impl io::Write,
    cards: &[JobCardView],
    authenticated: bool,
    styles: &CategoryStyleMap,
) -> io::Result<()> {
    writeln!(out, "Opportunities")?;
    writeln!(out, "Showing {} results", cards.len())?;
    for card in cards {
        writeln!(out)?;
        write_card(out, card, authenticated, styles)?;
    }
    Ok(())
}

pub fn write_card(
    out: &mut impl io::Write,
    card: &JobCardView,
    authenticated: bool,
    styles: &CategoryStyleMap,
) -> io::Result<()> {
    let job = &card.job;
    writeln!(out, "{} ({})", job.title.as_str(), job.id.as_str())?;
    writeln!(out, "{} \u{2022} {}", job.org_name, job.location_display())?;
    if !job.description.is_empty() {
        writeln!(out, "{}", job.description)?;
    }

    let mut tags = vec![job.op_type.clone()];
    tags.extend(
        job.categories
            .iter()
            .map(|category| styles.style(category).paint(category)),
    );
    writeln!(out, "{}", tags.join(" | "))?;

    // The toggle affordance only exists for authenticated sessions and is
    // disabled while the job's own request is in flight.
    if authenticated {
        let marker = if card.is_bookmarked { "[*]" } else { "[ ]" };
        let label = if card.is_bookmarked {
            "Remove bookmark"
        } else {
            "Add bookmark"
        };
        if card.is_pending {
            writeln!(out, "{marker} {label} (pending)")?;
        } else {
            writeln!(out, "{marker} {label}")?;
        }
    }
    Ok(())
}

pub fn write_detail(out: &mut impl io::Write, detail: &JobDetail) -> io::Result<()> {
    let job = &detail.job;
    writeln!(out, "{}", job.title.as_str())?;
    writeln!(out, "{} \u{2022} {}", job.org_name, job.location_display())?;

    writeln!(out, "\nDescription")?;
    writeln!(out, "{}", job.description)?;

    if !detail.responsibilities.is_empty() {
        writeln!(out, "\nResponsibilities")?;
        for line in detail.responsibilities.lines() {
            writeln!(out, "  - {line}")?;
        }
    }

    if !detail.ideal_candidate.is_empty() {
        writeln!(out, "\nIdeal Candidate")?;
        writeln!(out, "{}", detail.ideal_candidate)?;
    }

    if !detail.when_and_where.is_empty() {
        writeln!(out, "\nWhen and Where")?;
        writeln!(out, "{}", detail.when_and_where)?;
    }

    writeln!(out, "\nAbout")?;
    for (label, date) in [
        ("Posted On", detail.date_posted),
        ("Deadline", detail.deadline),
        ("Start Date", detail.start_date),
        ("End Date", detail.end_date),
    ] {
        if let Some(date) = date {
            writeln!(out, "  {label}: {}", date.format("%b %e, %Y"))?;
        }
    }

    if !job.categories.is_empty() {
        writeln!(out, "\nCategories: {}", job.categories.join(", "))?;
    }
    if !detail.required_skills.is_empty() {
        writeln!(out, "Required Skills: {}", detail.required_skills.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use akil_demo::job::{ENGINEER, ENGINEER_DETAIL};
    use pretty_assertions::assert_eq;

    use super::*;

    fn card(is_bookmarked: bool, is_pending: bool) -> JobCardView {
        JobCardView {
            job: ENGINEER.clone(),
            is_bookmarked,
            is_pending,
        }
    }

    fn rendered(card: &JobCardView, authenticated: bool) -> String {
        let mut out = Vec::new();
        write_card(&mut out, card, authenticated, &CategoryStyleMap::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn affordance_reflects_the_bookmark_state() {
        assert!(rendered(&card(false, false), true).contains("[ ] Add bookmark"));
        assert!(rendered(&card(true, false), true).contains("[*] Remove bookmark"));
    }

    #[test]
    fn affordance_is_disabled_while_pending() {
        let output = rendered(&card(true, true), true);
        assert!(output.contains("[*] Remove bookmark (pending)"));
    }

    #[test]
    fn affordance_is_hidden_for_guests() {
        let output = rendered(&card(false, false), false);
        assert!(!output.contains("bookmark"));
    }

    #[test]
    fn card_shows_org_and_joined_location() {
        let output = rendered(&card(false, false), false);
        assert!(output.contains("Africa to Silicon Valley \u{2022} Addis Ababa, Ethiopia"));
    }

    #[test]
    fn list_header_counts_results() {
        let mut out = Vec::new();
        write_card_list(
            &mut out,
            &[card(false, false)],
            false,
            &CategoryStyleMap::default(),
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Opportunities\nShowing 1 results\n"));
    }

    #[test]
    fn fixed_categories_have_fixed_colors() {
        let styles = CategoryStyleMap::default();
        assert_eq!(styles.style("education"), AnsiColor::Yellow);
        assert_eq!(styles.style("Education"), AnsiColor::Yellow);
        assert_eq!(styles.style("IT"), AnsiColor::Blue);
    }

    #[test]
    fn dynamic_categories_are_stable_across_maps() {
        let a = CategoryStyleMap::default();
        let b = CategoryStyleMap::default();
        for category in ["Backend", "Design", "Operations", "Marketing"] {
            assert_eq!(a.style(category), b.style(category), "{category}");
            assert_eq!(a.style(category), a.style(&category.to_uppercase()));
        }
    }

    #[test]
    fn detail_renders_sections() {
        let mut out = Vec::new();
        write_detail(&mut out, &ENGINEER_DETAIL).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Responsibilities"));
        assert!(output.contains("  - Design APIs"));
        assert!(output.contains("Posted On: Jul  7, 2023"));
        assert!(output.contains("Required Skills: Rust, SQL"));
    }
}
