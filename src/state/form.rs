use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use yew::Reducible;

use crate::content::FormSpec;
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Set { name: &'static str, value: String },
    Submit,
}

/// Field values of one form view plus its editing/submitted flag.
///
/// Lives only as long as the view does; nothing is written anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
    submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub values: BTreeMap<&'static str, String>,
    #[serde(skip)]
    pub redirect: Option<Route>,
}

impl Submission {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

impl FormState {
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The submission a submit would produce now, or `None` once submitted.
    pub fn submission(&self, spec: &FormSpec) -> Option<Submission> {
        if self.submitted {
            return None;
        }
        Some(Submission {
            form: spec.key,
            values: self.values.clone(),
            redirect: spec.redirect,
        })
    }

    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            // Inputs are unmounted after submit; late events are dropped.
            FormAction::Set { .. } if self.submitted => {}
            FormAction::Set { name, value } => {
                self.values.insert(name, value);
            }
            FormAction::Submit => self.submitted = true,
        }
        self
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NEW_MEMBER_FORM, PRAYER_FORM};

    fn set(name: &'static str, value: &str) -> FormAction {
        FormAction::Set { name, value: value.to_string() }
    }

    #[test]
    fn fresh_state_is_empty() {
        let s = FormState::default();
        assert!(!s.is_submitted());
        for f in NEW_MEMBER_FORM.fields {
            assert_eq!(s.value(f.name), "");
        }
    }

    #[test]
    fn values_are_keyed_by_field_name() {
        let s = FormState::default()
            .apply(set("name", "Ada"))
            .apply(set("email", "ada@example.com"))
            .apply(set("name", "Ada L."));
        assert_eq!(s.value("name"), "Ada L.");
        assert_eq!(s.value("email"), "ada@example.com");
        assert_eq!(s.value("phone"), "");
    }

    #[test]
    fn submission_carries_the_redirect_until_submitted() {
        let s = FormState::default()
            .apply(set("name", "Ada"))
            .apply(set("email", "ada@example.com"));

        let first = s.submission(&NEW_MEMBER_FORM).expect("editing form submits");
        assert_eq!(first.redirect, Some(Route::ImNew));
        assert_eq!(first.form, "new-member");

        let s = s.apply(FormAction::Submit);
        assert!(s.is_submitted());
        assert_eq!(s.submission(&NEW_MEMBER_FORM), None);
    }

    #[test]
    fn submit_without_redirect_only_changes_display_state() {
        let s = FormState::default().apply(set("request", "healing"));
        let sub = s.submission(&PRAYER_FORM).expect("editing form submits");
        assert_eq!(sub.redirect, None);
        assert!(s.apply(FormAction::Submit).is_submitted());
    }

    #[test]
    fn edits_after_submit_are_ignored() {
        let s = FormState::default()
            .apply(set("name", "Ada"))
            .apply(FormAction::Submit)
            .apply(set("name", "Bob"));
        assert_eq!(s.value("name"), "Ada");
    }

    #[test]
    fn submission_json_omits_the_redirect() {
        let s = FormState::default().apply(set("name", "Ada"));
        let json = s.submission(&NEW_MEMBER_FORM).map(|s| s.to_json()).unwrap_or_default();
        assert_eq!(json, r#"{"form":"new-member","values":{"name":"Ada"}}"#);
    }
}
