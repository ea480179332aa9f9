//! Application Form Component
//!
//! Form for creating a new application, shown inside the dashboard modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StatusSelector;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::models::{NewApplication, Status};

/// Required fields, checked before anything is sent
pub fn validate(new_app: &NewApplication) -> Result<(), ValidationError> {
    if new_app.company_name.trim().is_empty() {
        return Err(ValidationError::MissingField("company name"));
    }
    if new_app.job_title.trim().is_empty() {
        return Err(ValidationError::MissingField("job title"));
    }
    if chrono::NaiveDate::parse_from_str(new_app.application_date.trim(), "%Y-%m-%d").is_err() {
        return Err(ValidationError::MissingField("application date"));
    }
    Ok(())
}

/// Form for creating applications
#[component]
pub fn ApplicationForm(
    /// Called after the application was saved
    #[prop(into)] on_saved: Callback<u32>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (company_name, set_company_name) = signal(String::new());
    let (job_title, set_job_title) = signal(String::new());
    let (application_date, set_application_date) = signal(String::new());
    let (method, set_method) = signal(String::new());
    let (contact_info, set_contact_info) = signal(String::new());
    let (status, set_status) = signal(Status::Applied);
    let (email, set_email) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let reset = move || {
        set_company_name.set(String::new());
        set_job_title.set(String::new());
        set_application_date.set(String::new());
        set_method.set(String::new());
        set_contact_info.set(String::new());
        set_status.set(Status::Applied);
        set_email.set(String::new());
        set_notes.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let new_app = NewApplication {
            company_name: company_name.get_untracked().trim().to_string(),
            job_title: job_title.get_untracked().trim().to_string(),
            application_date: application_date.get_untracked(),
            method: method.get_untracked().trim().to_string(),
            contact_info: contact_info.get_untracked().trim().to_string(),
            status: status.get_untracked(),
            email: email.get_untracked().trim().to_string(),
            notes: notes.get_untracked(),
        };
        if let Err(e) = validate(&new_app) {
            ctx.notify_error(e.to_string());
            return;
        }
        let mirror_notes = ctx.config.get_untracked().mirror_application_notes;

        set_saving.set(true);
        spawn_local(async move {
            match api::submit_application(&new_app, mirror_notes).await {
                Ok(id) => {
                    reset();
                    on_saved.run(id);
                }
                Err(e) => ctx.notify_error(format!("Error saving application: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form id="applicationForm" class="application-form" on:submit=submit>
            <div class="form-group">
                <label for="companyName">"Company Name"</label>
                <input
                    id="companyName"
                    type="text"
                    required
                    prop:value=move || company_name.get()
                    on:input=move |ev| set_company_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="jobTitle">"Job Title"</label>
                <input
                    id="jobTitle"
                    type="text"
                    required
                    prop:value=move || job_title.get()
                    on:input=move |ev| set_job_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="applicationDate">"Application Date"</label>
                    <input
                        id="applicationDate"
                        type="date"
                        required
                        prop:value=move || application_date.get()
                        on:input=move |ev| set_application_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="method">"Method"</label>
                    <input
                        id="method"
                        type="text"
                        placeholder="LinkedIn, referral, company site..."
                        prop:value=move || method.get()
                        on:input=move |ev| set_method.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-group">
                <label>"Status"</label>
                <StatusSelector current_status=status on_change=move |s| set_status.set(s) />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="contactInfo">"Contact"</label>
                    <input
                        id="contactInfo"
                        type="text"
                        prop:value=move || contact_info.get()
                        on:input=move |ev| set_contact_info.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="notes">"Notes"</label>
                <textarea
                    id="notes"
                    rows="4"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-actions">
                <button type="button" class="btn-cancel" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn-save" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Application" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewApplication {
        NewApplication {
            company_name: "Acme".into(),
            job_title: "Engineer".into(),
            application_date: "2024-06-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut app = filled();
        app.job_title = "  ".into();
        assert_eq!(validate(&app), Err(ValidationError::MissingField("job title")));

        let mut app = filled();
        app.application_date = "June 1st".into();
        assert_eq!(validate(&app), Err(ValidationError::MissingField("application date")));

        app.company_name.clear();
        assert_eq!(validate(&app), Err(ValidationError::MissingField("company name")));
    }
}
