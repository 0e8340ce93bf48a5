//! Selection precondition checks.
//!
//! Before a transformation runs, the host's selection must contain exactly
//! one class-like element. These checks are the only part of the pipeline
//! that surfaces errors to the caller; everything downstream degrades on
//! malformed data instead of failing.

use classforge_core::snapshot::ElementSnapshot;
use log::debug;

use crate::ClassForgeError;

/// Picks the single class-like element out of a selection snapshot.
///
/// # Errors
///
/// - [`ClassForgeError::NoSelection`] when the selection is empty
/// - [`ClassForgeError::NotAClass`] when nothing class-like is selected
/// - [`ClassForgeError::MultipleSelection`] when more than one class-like
///   element is selected
pub fn select_class(selection: &[ElementSnapshot]) -> Result<&ElementSnapshot, ClassForgeError> {
    if selection.is_empty() {
        return Err(ClassForgeError::NoSelection);
    }

    let mut classes = selection.iter().filter(|element| element.is_class());

    let Some(first) = classes.next() else {
        let kind = selection[0].type_name().to_string();
        debug!(kind; "Selection contains no class-like element");
        return Err(ClassForgeError::NotAClass(kind));
    };

    let extra = classes.count();
    if extra > 0 {
        return Err(ClassForgeError::MultipleSelection(extra + 1));
    }

    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(type_name: &str) -> ElementSnapshot {
        ElementSnapshot::new(type_name, Vec::new(), Vec::new())
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert!(matches!(
            select_class(&[]),
            Err(ClassForgeError::NoSelection)
        ));
    }

    #[test]
    fn non_class_selection_is_rejected() {
        let selection = [element("package"), element("note")];
        assert!(matches!(
            select_class(&selection),
            Err(ClassForgeError::NotAClass(kind)) if kind == "package"
        ));
    }

    #[test]
    fn multiple_classes_are_rejected() {
        let selection = [element("class"), element("class")];
        assert!(matches!(
            select_class(&selection),
            Err(ClassForgeError::MultipleSelection(2))
        ));
    }

    #[test]
    fn single_class_is_accepted_among_noise() {
        let selection = [element("note"), element("class")];
        let chosen = select_class(&selection).expect("one class selected");
        assert!(chosen.is_class());
    }
}
