//! Transient "copied" acknowledgement.
//!
//! Each copy shows a fresh notice tagged with a generation number. The
//! dismissal timer carries the generation it was scheduled for, so a timer
//! from an older copy cannot hide a newer notice.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyNotice {
    generation: u64,
    message: Option<String>,
}

impl CopyNotice {
    /// Show a notice for `hex`, returning the generation to dismiss later.
    pub fn show(&mut self, hex: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(format!("{hex} copied to clipboard."));
        self.generation
    }

    /// Hide the notice if it still belongs to `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_dismiss() {
        let mut notice = CopyNotice::default();
        assert_eq!(notice.message(), None);
        let g = notice.show("#804040");
        assert_eq!(notice.message(), Some("#804040 copied to clipboard."));
        assert!(notice.dismiss(g));
        assert_eq!(notice.message(), None);
        assert!(!notice.dismiss(g));
    }

    #[test]
    fn later_copy_supersedes_earlier_timer() {
        let mut notice = CopyNotice::default();
        let first = notice.show("#FFFFFF");
        let second = notice.show("#000000");
        assert!(!notice.dismiss(first));
        assert_eq!(notice.message(), Some("#000000 copied to clipboard."));
        assert!(notice.dismiss(second));
    }
}
