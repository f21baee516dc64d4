use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::REDIRECT_DELAY_MS;
use crate::content::{FormFieldSpec, FormSpec, InputKind};
use crate::route::{navigate_to, Route};
use crate::schedule::{BrowserScheduler, Scheduler};
use crate::state::form::{FormAction, FormState};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RedirectOutcome {
    Waiting,
    Navigated,
    Suppressed,
}

/// A scheduled post-submit navigation. Dropping it before it fires cancels
/// the navigation.
struct PendingRedirect<T = Timeout> {
    _timer: T,
    outcome: Rc<Cell<RedirectOutcome>>,
}

impl<T> PendingRedirect<T> {
    fn schedule<S, F>(scheduler: &S, route: Route, navigate: F) -> Self
    where
        S: Scheduler<Once = T>,
        F: FnOnce(Route) + 'static,
    {
        let outcome = Rc::new(Cell::new(RedirectOutcome::Waiting));
        let state = outcome.clone();
        let timer = scheduler.after(
            REDIRECT_DELAY_MS,
            Box::new(move || {
                state.set(RedirectOutcome::Navigated);
                navigate(route);
            }),
        );
        log::debug!("redirect to {} in {}ms", route.to_path(), REDIRECT_DELAY_MS);
        Self { _timer: timer, outcome }
    }

    #[cfg(test)]
    fn outcome(&self) -> Rc<Cell<RedirectOutcome>> {
        self.outcome.clone()
    }
}

impl<T> Drop for PendingRedirect<T> {
    fn drop(&mut self) {
        if self.outcome.get() == RedirectOutcome::Waiting {
            self.outcome.set(RedirectOutcome::Suppressed);
            log::debug!("form view closed before redirect; navigation suppressed");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GenericFormProps {
    pub spec: &'static FormSpec,
}

/// Renders `spec.fields` as labeled inputs and swaps to the success message
/// once submitted. Values never leave the component.
#[function_component(GenericForm)]
pub fn generic_form(props: &GenericFormProps) -> Html {
    let spec = props.spec;
    let state = use_reducer(FormState::default);
    let navigator = use_navigator();
    let pending: Rc<RefCell<Option<PendingRedirect>>> = use_mut_ref(|| None);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| move || drop(pending.borrow_mut().take()));
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            // Native `required` checks have already passed at this point.
            e.prevent_default();
            let Some(submission) = state.submission(spec) else {
                return;
            };
            log::info!("form submitted: {}", submission.to_json());

            if let (Some(route), Some(nav)) = (submission.redirect, navigator.clone()) {
                let redirect = PendingRedirect::schedule(&BrowserScheduler, route, move |route| {
                    navigate_to(&nav, route)
                });
                *pending.borrow_mut() = Some(redirect);
            }
            state.dispatch(FormAction::Submit);
        })
    };

    if state.is_submitted() {
        return html! {
            <div class="text-center py-10">
                <h2 class={classes!("text-3xl", "font-bold", theme::ACCENT_MEDIUM, theme::FONT_HEADING)}>{"Success!"}</h2>
                <p class={classes!("mt-4", "text-lg", theme::TEXT_NORMAL)}>{ spec.success_message }</p>
            </div>
        };
    }

    let fields = spec.fields.iter().map(|field| {
        let value = state.value(field.name).to_string();
        html! { <FieldInput key={field.name} field={field.clone()} {value} state={state.dispatcher()} /> }
    });

    html! {
        <form {onsubmit} class={classes!("space-y-6", theme::TEXT_NORMAL)}>
            { for fields }
            <button type="submit" class={classes!(theme::BTN_PRIMARY, theme::BTN_BLOCK, "w-full")}>
                {"Submit Form"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: FormFieldSpec,
    value: String,
    state: UseReducerDispatcher<FormState>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let field = &props.field;
    let name = field.name;

    let control = match field.kind {
        InputKind::Textarea => {
            let oninput = {
                let state = props.state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    state.dispatch(FormAction::Set { name, value });
                })
            };
            html! {
                <textarea id={name} {name} rows="4" required={field.required}
                    value={props.value.clone()} {oninput} class={theme::INPUT}></textarea>
            }
        }
        kind => {
            let oninput = {
                let state = props.state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    state.dispatch(FormAction::Set { name, value });
                })
            };
            html! {
                <input type={kind.input_type()} id={name} {name} required={field.required}
                    value={props.value.clone()} {oninput} class={theme::INPUT} />
            }
        }
    };

    html! {
        <div>
            <label for={name} class={classes!("block", "text-sm", "font-medium", theme::TEXT_NORMAL)}>
                { field.label }
                if field.required {
                    {" "}<span class="text-red-500">{"*"}</span>
                }
            </label>
            { control }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormPageProps {
    pub spec: &'static FormSpec,
}

#[function_component(FormPage)]
pub fn form_page(props: &FormPageProps) -> Html {
    let spec = props.spec;
    html! {
        <div class={classes!(theme::SECTION_PADDING, theme::SECONDARY_BG, theme::FONT_BODY)}>
            <div class={classes!(theme::CONTAINER, "max-w-2xl")}>
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <div class="text-center mb-8">
                        <h1 class={classes!("text-3xl", "font-extrabold", "tracking-tight", "sm:text-4xl", theme::TEXT_DARK, theme::FONT_HEADING)}>
                            { spec.title }
                        </h1>
                        <p class={classes!("mt-2", "text-lg", theme::TEXT_LIGHT)}>{ spec.subtitle }</p>
                    </div>
                    // Keyed so switching between form routes starts from a fresh state.
                    <GenericForm key={spec.key} {spec} />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NEW_MEMBER_FORM, PRAYER_FORM};
    use crate::schedule::testing::ManualScheduler;

    fn recorder() -> (Rc<RefCell<Vec<Route>>>, impl FnOnce(Route) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |route| sink.borrow_mut().push(route))
    }

    #[test]
    fn redirect_navigates_once_after_the_delay() {
        let clock = ManualScheduler::default();
        let (seen, navigate) = recorder();
        let route = NEW_MEMBER_FORM.redirect.expect("new-member form redirects");

        let redirect = PendingRedirect::schedule(&clock, route, navigate);
        assert_eq!(clock.once_delays(), vec![REDIRECT_DELAY_MS]);
        assert!(seen.borrow().is_empty());

        assert_eq!(clock.fire_once(), 1);
        assert_eq!(clock.fire_once(), 0);
        assert_eq!(*seen.borrow(), vec![Route::ImNew]);

        let outcome = redirect.outcome();
        drop(redirect);
        assert_eq!(outcome.get(), RedirectOutcome::Navigated);
    }

    #[test]
    fn closing_the_view_first_suppresses_the_redirect() {
        let clock = ManualScheduler::default();
        let (seen, navigate) = recorder();

        let redirect = PendingRedirect::schedule(&clock, Route::ImNew, navigate);
        let outcome = redirect.outcome();
        assert_eq!(outcome.get(), RedirectOutcome::Waiting);

        drop(redirect);
        assert_eq!(outcome.get(), RedirectOutcome::Suppressed);
        assert_eq!(clock.fire_once(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn forms_without_a_redirect_schedule_nothing() {
        assert_eq!(PRAYER_FORM.redirect, None);
        let clock = ManualScheduler::default();
        let pending = PRAYER_FORM
            .redirect
            .map(|route| PendingRedirect::schedule(&clock, route, |_| {}));
        assert!(pending.is_none());
        assert!(clock.once_delays().is_empty());
    }
}
