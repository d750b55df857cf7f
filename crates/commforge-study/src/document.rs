//! Assembled study documents.

use commforge_emit::Section;

/// A fully-generated study: the ordered sections plus the concatenated
/// script text, framed by the solver's begin/end procedures.
///
/// The document only exists when the whole project validated clean —
/// there is no partially-generated variant. Advisory warnings are
/// attached to the section they concern and rendered as comment lines;
/// they never block generation.
#[derive(Clone, Debug, PartialEq)]
pub struct StudyDocument {
    /// Ordered sections, one per command family (empty families omitted).
    pub sections: Vec<Section>,
    /// The concatenated script.
    pub script: String,
}

impl StudyDocument {
    /// Assemble a document from built sections, dropping empty ones and
    /// rendering the final script.
    pub(crate) fn assemble(sections: Vec<Section>) -> StudyDocument {
        let sections: Vec<Section> = sections.into_iter().filter(|s| !s.is_empty()).collect();
        let script = render(&sections);
        StudyDocument { sections, script }
    }

    /// The concatenated script text.
    pub fn script(&self) -> &str {
        &self.script
    }
}

fn render(sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("DEBUT(\n    LANG='FR',\n);\n");
    for (number, section) in sections.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("# --- {}. {} ---\n", number + 1, section.title));
        for note in &section.notes {
            out.push_str(&format!("# NOTE: {note}\n"));
        }
        for block in &section.blocks {
            for note in &block.notes {
                out.push_str(&format!("# NOTE: {note}\n"));
            }
            out.push_str(&block.text);
            out.push('\n');
        }
    }
    out.push_str("\nFIN();\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use commforge_core::symbol::sanitize;
    use commforge_emit::{Command, Value};

    fn section_with_block() -> Section {
        let mut section = Section::new("Meshes");
        section.push(
            Command::assign(sanitize("deck"), "LIRE_MAILLAGE").arg("UNITE", Value::Int(20)),
        );
        section
    }

    #[test]
    fn script_is_framed_and_numbered() {
        let document = StudyDocument::assemble(vec![section_with_block()]);
        let script = document.script();
        assert!(script.starts_with("DEBUT(\n    LANG='FR',\n);\n"), "{script}");
        assert!(script.contains("# --- 1. Meshes ---"), "{script}");
        assert!(script.ends_with("\nFIN();\n"), "{script}");
    }

    #[test]
    fn empty_sections_are_dropped_and_numbering_stays_contiguous() {
        let empty = Section::new("Model");
        let mut loads = Section::new("Loads");
        loads.push(Command::call("DEBUT"));
        let document = StudyDocument::assemble(vec![section_with_block(), empty, loads]);
        assert_eq!(document.sections.len(), 2);
        assert!(document.script.contains("# --- 2. Loads ---"));
        assert!(!document.script.contains("Model"));
    }

    #[test]
    fn section_notes_render_as_comments() {
        let mut section = section_with_block();
        section.notes.push("unit slot 7 is outside the window".to_string());
        let document = StudyDocument::assemble(vec![section]);
        assert!(document
            .script
            .contains("# NOTE: unit slot 7 is outside the window"));
    }
}
