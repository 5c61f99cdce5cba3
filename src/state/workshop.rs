use crate::models::{ShellDesign, ShellStyle};

/// Shell workshop screen: a draft prompt, a selected preset style, and the
/// list of generated concepts, newest first.
#[derive(Debug, Clone)]
pub struct ShellWorkshop {
    pub prompt: String,
    pub style: ShellStyle,
    pub designs: Vec<ShellDesign>,
}

#[derive(Debug, Clone)]
pub enum WorkshopAction {
    SetPrompt(String),
    SelectStyle(ShellStyle),
    RecordDesign(ShellDesign),
    MarkPrinted(String),
}

impl Default for ShellWorkshop {
    fn default() -> Self {
        ShellWorkshop {
            prompt: String::new(),
            style: ShellStyle::Cyberpunk,
            designs: Vec::new(),
        }
    }
}

impl ShellWorkshop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation is gated on a non-blank prompt.
    pub fn can_generate(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    pub fn apply(&mut self, action: WorkshopAction) {
        match action {
            WorkshopAction::SetPrompt(prompt) => self.prompt = prompt,
            WorkshopAction::SelectStyle(style) => self.style = style,
            WorkshopAction::RecordDesign(design) => self.designs.insert(0, design),
            WorkshopAction::MarkPrinted(id) => {
                if let Some(design) = self.designs.iter_mut().find(|d| d.id == id) {
                    design.is_printed = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageRef;

    #[test]
    fn test_blank_prompt_blocks_generation() {
        let mut workshop = ShellWorkshop::new();
        assert!(!workshop.can_generate());

        workshop.apply(WorkshopAction::SetPrompt("   ".to_string()));
        assert!(!workshop.can_generate());

        workshop.apply(WorkshopAction::SetPrompt("a lucky cat".to_string()));
        assert!(workshop.can_generate());
    }

    #[test]
    fn test_designs_are_newest_first() {
        let mut workshop = ShellWorkshop::new();
        workshop.apply(WorkshopAction::RecordDesign(ShellDesign::new(
            "first", "Cyberpunk", ImageRef::Placeholder,
        )));
        workshop.apply(WorkshopAction::RecordDesign(ShellDesign::new(
            "second", "Pixel Art", ImageRef::Placeholder,
        )));

        assert_eq!(workshop.designs[0].prompt, "second");
        assert_eq!(workshop.designs[1].prompt, "first");
    }

    #[test]
    fn test_mark_printed_targets_one_design() {
        let mut workshop = ShellWorkshop::new();
        let design = ShellDesign::new("first", "Cyberpunk", ImageRef::Placeholder);
        let id = design.id.clone();
        workshop.apply(WorkshopAction::RecordDesign(design));
        workshop.apply(WorkshopAction::RecordDesign(ShellDesign::new(
            "second", "Minimalist", ImageRef::Placeholder,
        )));

        workshop.apply(WorkshopAction::MarkPrinted(id));
        assert!(workshop.designs[1].is_printed);
        assert!(!workshop.designs[0].is_printed);

        // unknown id is a no-op
        workshop.apply(WorkshopAction::MarkPrinted("missing".to_string()));
    }
}
