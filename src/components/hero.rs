use yew::prelude::*;

use crate::components::image::HidingImage;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::Slide;
use crate::route::{use_navigate, Route};
use crate::schedule::{BrowserScheduler, Scheduler};
use crate::state::carousel::{Carousel, CarouselAction};
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub slides: &'static [Slide],
}

/// Starts the autoplay tick for `len` slides. A single slide never rotates.
fn autoplay<S: Scheduler>(scheduler: &S, len: usize, tick: impl FnMut() + 'static) -> Option<S::Every> {
    (len > 1).then(|| scheduler.every(CAROUSEL_INTERVAL_MS, Box::new(tick)))
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let slides = props.slides;
    let carousel = use_reducer(|| Carousel::new(slides.len()));
    let go = use_navigate();

    // Autoplay; the interval is cancelled when the hero unmounts.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(slides.len(), move |len| {
            let interval = autoplay(&BrowserScheduler, *len, move || {
                dispatcher.dispatch(CarouselAction::Tick)
            });
            move || drop(interval)
        });
    }

    let Some(current) = slides.get(carousel.index()) else {
        return html! {};
    };

    let layers = slides.iter().enumerate().map(|(i, slide)| {
        let visibility = if i == carousel.index() { "opacity-100" } else { "opacity-0" };
        html! {
            <div key={i} class={classes!("absolute", "inset-0", "transition-opacity", "duration-1000", visibility)}>
                <HidingImage src={slide.image} alt={slide.title} class={classes!("w-full", "h-full", "object-cover")} />
                <div class="absolute inset-0 bg-stone-900/40 bg-gradient-to-t from-stone-900 to-transparent"></div>
            </div>
        }
    });

    let dots = (0..carousel.len()).map(|i| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(i)))
        };
        let look = if i == carousel.index() { "bg-indigo-600 scale-125" } else { "bg-stone-300/50" };
        html! {
            <button key={i} aria-label={format!("Show slide {}", i + 1)} {onclick}
                class={classes!("w-3", "h-3", "rounded-full", theme::TRANSITION, look)}></button>
        }
    });

    let on_new = {
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go.emit(Route::NewMemberForm))
    };
    let on_sermons = Callback::from(move |_: MouseEvent| go.emit(Route::Sermons));

    html! {
        <section class="relative h-[85vh] flex items-center justify-center text-center px-4 overflow-hidden bg-stone-800">
            { for layers }
            <div class="relative z-10">
                // Keyed on the index so the entry animation replays per slide.
                <div class="transition-all duration-700" key={carousel.index()}>
                    <h1 class={classes!("text-4xl", "md:text-6xl", "lg:text-7xl", "font-extrabold", "tracking-tight", "text-white", "leading-tight", "animate-fade-in-down", theme::FONT_HEADING)}>
                        { current.title }
                    </h1>
                    <p class="mt-4 max-w-2xl mx-auto text-lg md:text-xl text-stone-300 animate-fade-in-up">{ current.subtitle }</p>
                </div>
                <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4 animate-fade-in-up" style="animation-delay: 0.5s">
                    <button onclick={on_new} class={classes!(theme::BTN_PRIMARY, theme::BTN_LG, "w-full", "sm:w-auto")}>{"I'm New Here"}</button>
                    <button onclick={on_sermons} class={classes!(theme::BTN_SECONDARY, "w-full", "sm:w-auto")}>{"Watch Latest Sermon"}</button>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10 flex space-x-3">
                { for dots }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::testing::ManualScheduler;

    fn stepper(carousel: &Rc<Cell<Carousel>>) -> impl FnMut() + 'static {
        let carousel = carousel.clone();
        move || carousel.set(carousel.get().apply(CarouselAction::Tick))
    }

    #[test]
    fn autoplay_ticks_every_interval_until_dropped() {
        let clock = ManualScheduler::default();
        let carousel = Rc::new(Cell::new(Carousel::new(3)));

        let interval = autoplay(&clock, 3, stepper(&carousel));
        assert!(interval.is_some());
        assert_eq!(clock.every_periods(), vec![CAROUSEL_INTERVAL_MS]);

        clock.tick_every();
        clock.tick_every();
        assert_eq!(carousel.get().index(), 2);

        drop(interval);
        assert_eq!(clock.tick_every(), 0);
        assert_eq!(carousel.get().index(), 2);
    }

    #[test]
    fn single_slide_starts_no_timer() {
        let clock = ManualScheduler::default();
        let carousel = Rc::new(Cell::new(Carousel::new(1)));
        assert!(autoplay(&clock, 1, stepper(&carousel)).is_none());
        assert!(autoplay(&clock, 0, stepper(&carousel)).is_none());
        assert!(clock.every_periods().is_empty());
    }
}
