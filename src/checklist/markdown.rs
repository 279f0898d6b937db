//! Markdown serialization of checklist state.
//!
//! Produces a single document with GitHub-style checkboxes, suitable for
//! pasting into an issue tracker or note. This is a pure read over the
//! (sections, checked set) pair; it never mutates state.

use crate::label::plain_text;

use super::Checklist;

impl Checklist {
    /// Serialize the checklist's current state to Markdown.
    ///
    /// Layout:
    /// - a level-1 heading with `title`;
    /// - one `## <icon> <name>` heading per section, in original order,
    ///   omitted entirely when the checklist has a single section (a
    ///   one-section checklist reads as a flat list);
    /// - one `- [x]` / `- [ ]` line per item, label and description run
    ///   through the plain-text projection, description joined with an
    ///   em-dash;
    /// - a blank line between sections and a trailing newline.
    ///
    /// Stale checked keys (items no longer in the section data) are not
    /// rendered. Calling this twice without intervening toggles yields
    /// byte-identical output.
    ///
    /// # Example
    ///
    /// ```
    /// use ticklist::{Checklist, ChecklistItem, ChecklistSection};
    ///
    /// let sections = vec![ChecklistSection::new("s1", "Setup", "🔧")
    ///     .with_item(ChecklistItem::new("Install the <b>CLI</b>"))
    ///     .with_item(ChecklistItem::new("Authenticate"))];
    /// let mut checklist = Checklist::new(sections).unwrap();
    /// checklist.toggle("s1", 0);
    ///
    /// let doc = checklist.to_markdown("Getting started");
    /// assert!(doc.starts_with("# Getting started\n"));
    /// assert!(doc.contains("- [x] Install the CLI"));
    /// assert!(doc.contains("- [ ] Authenticate"));
    /// ```
    #[must_use]
    pub fn to_markdown(&self, title: &str) -> String {
        let mut lines = Vec::new();
        lines.push(format!("# {}", title));

        let show_headings = self.sections().len() > 1;

        for section in self.sections() {
            lines.push(String::new());
            if show_headings {
                lines.push(format!("## {} {}", section.icon, section.name));
            }
            for (index, item) in section.items.iter().enumerate() {
                let mark = if self.is_checked(&section.id, index) {
                    "x"
                } else {
                    " "
                };
                let mut line = format!("- [{}] {}", mark, plain_text(&item.label));
                if let Some(ref description) = item.description {
                    line.push_str(" \u{2014} ");
                    line.push_str(&plain_text(description));
                }
                lines.push(line);
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
