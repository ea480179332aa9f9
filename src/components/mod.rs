//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod status_selector;
mod note_edit_target;
mod modal;
mod notice_area;
mod nav_bar;
mod calendar_view;
mod application_card;
mod application_form;
mod note_card;
mod note_editor;
mod stat_card;
mod status_chart;
mod timeline_chart;
mod method_chart;
mod company_list;
mod activity_feed;

pub use delete_confirm_button::DeleteConfirmButton;
pub use status_selector::StatusSelector;
pub use note_edit_target::{Folder, NoteEditTarget};
pub use modal::Modal;
pub use notice_area::NoticeArea;
pub use nav_bar::NavBar;
pub use calendar_view::CalendarView;
pub use application_card::{empty_slots, ApplicationCard, EmptyCard};
pub use application_form::ApplicationForm;
pub use note_card::NoteCardView;
pub use note_editor::NoteEditor;
pub use stat_card::StatCard;
pub use status_chart::StatusChart;
pub use timeline_chart::TimelineChart;
pub use method_chart::MethodChart;
pub use company_list::CompanyList;
pub use activity_feed::ActivityFeed;
