#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let a = Accordion::default();
        assert!((0..6).all(|i| !a.is_open(i)));
    }

    #[test]
    fn toggling_twice_restores_state() {
        let a = Accordion::default().toggle(2);
        assert!(a.is_open(2));
        let a = a.toggle(2);
        assert_eq!(a, Accordion::default());
        assert!(a.toggle(2).is_open(2));
    }

    #[test]
    fn opening_another_closes_the_first() {
        let a = Accordion::default().toggle(0).toggle(4);
        assert!(!a.is_open(0));
        assert!(a.is_open(4));
        let open = (0..6).filter(|i| a.is_open(*i)).count();
        assert_eq!(open, 1);
    }
}
