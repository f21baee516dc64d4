use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.is_empty() {
            return self;
        }
        let index = match action {
            CarouselAction::Tick => (self.index + 1) % self.len,
            CarouselAction::Select(k) if k < self.len => k,
            CarouselAction::Select(_) => self.index,
        };
        Self { index, ..self }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=6 {
            let mut c = Carousel::new(n).apply(CarouselAction::Select(n / 2));
            let start = c.index();
            for _ in 0..n {
                c = c.apply(CarouselAction::Tick);
            }
            assert_eq!(c.index(), start, "n = {n}");
        }
    }

    #[test]
    fn tick_wraps_after_last_slide() {
        let c = Carousel::new(3)
            .apply(CarouselAction::Select(2))
            .apply(CarouselAction::Tick);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn select_overrides_autoplay_position() {
        let mut c = Carousel::new(3);
        c = c.apply(CarouselAction::Tick).apply(CarouselAction::Tick);
        assert_eq!(c.apply(CarouselAction::Select(0)).index(), 0);
        assert_eq!(c.apply(CarouselAction::Select(1)).index(), 1);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let c = Carousel::new(3).apply(CarouselAction::Tick);
        assert_eq!(c.apply(CarouselAction::Select(3)).index(), 1);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let c = Carousel::new(0)
            .apply(CarouselAction::Tick)
            .apply(CarouselAction::Select(0));
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert!(!Carousel::new(1).is_empty());
    }

    #[test]
    fn reduce_keeps_the_same_rc_when_nothing_changes() {
        let c = Rc::new(Carousel::new(1));
        let next = c.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&c, &next));
    }
}
