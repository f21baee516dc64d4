use crate::content::{
    FormSpec, BELIEVERS_CLASS_FORM, COUNSELLING_FORM, NEW_MEMBER_FORM, PRAYER_FORM,
    SCHOOL_OF_DISCIPLESHIP_FORM, WORKERS_IN_TRAINING_FORM,
};
use crate::route::Route;

pub fn spec_for(route: Route) -> Option<&'static FormSpec> {
    match route {
        Route::NewMemberForm => Some(&NEW_MEMBER_FORM),
        Route::BelieversClassForm => Some(&BELIEVERS_CLASS_FORM),
        Route::WorkersInTrainingForm => Some(&WORKERS_IN_TRAINING_FORM),
        Route::SchoolOfDiscipleshipForm => Some(&SCHOOL_OF_DISCIPLESHIP_FORM),
        Route::PrayerForm => Some(&PRAYER_FORM),
        Route::CounsellingForm => Some(&COUNSELLING_FORM),
        _ => None,
    }
}
