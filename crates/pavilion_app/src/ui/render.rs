use std::fmt::Write as _;

use pavilion_core::{
    AppViewModel, CareersFormView, ContactFormView, ListingView, ProjectCardView, Route,
    SubmitOutcome, Theme,
};

use super::constants::*;

/// Renders the whole current page as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    render_chrome(&mut out, view);
    match view.route {
        Route::Home => render_static(&mut out, HOME_TITLE, HOME_SUBTITLE),
        Route::About => render_static(&mut out, ABOUT_TITLE, ABOUT_SUBTITLE),
        Route::Services => render_static(&mut out, SERVICES_TITLE, SERVICES_SUBTITLE),
        Route::Projects => render_listing(&mut out, &view.listing),
        Route::Partners => render_static(&mut out, PARTNERS_TITLE, PARTNERS_SUBTITLE),
        Route::Team => render_static(&mut out, TEAM_TITLE, TEAM_SUBTITLE),
        Route::Careers => render_careers(&mut out, &view.careers),
        Route::Blogs => render_static(&mut out, BLOGS_TITLE, BLOGS_SUBTITLE),
        Route::Contact => render_contact(&mut out, &view.contact),
    }
    out
}

fn render_chrome(out: &mut String, view: &AppViewModel) {
    let theme = match view.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let nav = if view.nav_scrolled { "compact" } else { "full" };
    let _ = writeln!(out, "[{:?}] theme={theme} nav={nav}", view.route);
    let _ = writeln!(out, "{}", "-".repeat(60));
}

fn render_static(out: &mut String, title: &str, subtitle: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{subtitle}");
}

fn render_listing(out: &mut String, listing: &ListingView) {
    let _ = writeln!(out, "{PROJECTS_TITLE}");
    let _ = writeln!(out, "{PROJECTS_SUBTITLE}");
    let _ = writeln!(out);
    match listing {
        ListingView::Idle | ListingView::Loading => {
            let _ = writeln!(out, "Loading projects...");
        }
        ListingView::Error { message } => {
            let _ = writeln!(out, "{message}");
        }
        ListingView::Ready {
            ongoing,
            completed,
            selected,
        } => {
            render_section(out, "Ongoing Projects", ongoing);
            render_section(out, "Completed Projects", completed);
            if let Some(detail) = selected {
                let _ = writeln!(out);
                let _ = writeln!(out, "=== {} ===", detail.title);
                for (name, value) in &detail.fields {
                    let _ = writeln!(out, "  {name}: {value}");
                }
                let _ = writeln!(out, "(type `close` to dismiss)");
            }
        }
    }
}

fn render_section(out: &mut String, heading: &str, cards: &[ProjectCardView]) {
    let _ = writeln!(out, "{heading}");
    if cards.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for card in cards {
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            card.id,
            non_empty(&card.title, "(untitled)"),
            non_empty(&card.category, "uncategorized"),
        );
        if !card.description.is_empty() {
            let _ = writeln!(out, "      {}", card.description);
        }
    }
    let _ = writeln!(out);
}

fn render_contact(out: &mut String, form: &ContactFormView) {
    let _ = writeln!(out, "{CONTACT_TITLE}");
    let _ = writeln!(out, "{CONTACT_SUBTITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  Name *: {}", form.fields.name);
    let _ = writeln!(out, "  Email *: {}", form.fields.email);
    let _ = writeln!(out, "  Organization: {}", form.fields.organization);
    let _ = writeln!(out, "  Message *: {}", form.fields.message);
    let _ = writeln!(out);
    if form.submitting {
        let _ = writeln!(out, "Sending...");
    }
    // A failed contact submission is logged but not surfaced here.
    if form.outcome == SubmitOutcome::AssumedDelivered {
        let _ = writeln!(out, "{CONTACT_SUCCESS}");
    }
}

fn render_careers(out: &mut String, form: &CareersFormView) {
    let _ = writeln!(out, "{CAREERS_TITLE}");
    let _ = writeln!(out, "{CAREERS_SUBTITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  Name *: {}", form.fields.name);
    let _ = writeln!(out, "  Email *: {}", form.fields.email);
    let _ = writeln!(out, "  Phone *: {}", form.fields.phone);
    let _ = writeln!(out, "  Job type: {}", form.fields.job_type.label());
    let _ = writeln!(out, "  LinkedIn: {}", form.fields.linkedin);
    let _ = writeln!(out);
    if form.submitting {
        let _ = writeln!(out, "Submitting...");
    }
    match form.outcome {
        SubmitOutcome::AssumedDelivered => {
            let _ = writeln!(out, "{CAREERS_SUCCESS}");
        }
        SubmitOutcome::TransportFailed => {
            let _ = writeln!(out, "{CAREERS_FAILURE}");
        }
        SubmitOutcome::Pending => {}
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pavilion_core::{update, AppState, Msg, ProjectRecord, Route};
    use std::collections::BTreeMap;

    fn record(id: u32, pairs: &[(&str, &str)]) -> ProjectRecord {
        let fields: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProjectRecord::new(id, fields)
    }

    #[test]
    fn ready_listing_renders_both_sections() {
        let state = AppState::new();
        let (state, _) = update(state, Msg::RouteChanged(Route::Projects));
        let (state, _) = update(
            state,
            Msg::ProjectsLoaded {
                result: Ok(vec![
                    record(2, &[("title", "Water Study"), ("status", "Ongoing")]),
                    record(3, &[("title", "Energy Audit"), ("status", "Completed")]),
                ]),
            },
        );

        let text = render(&state.view());
        assert!(text.contains("Ongoing Projects"));
        assert!(text.contains("Water Study"));
        assert!(text.contains("Completed Projects"));
        assert!(text.contains("Energy Audit"));
    }

    #[test]
    fn contact_failure_stays_quiet_careers_does_not() {
        let state = AppState::new();
        let (state, _) = update(state, Msg::RouteChanged(Route::Contact));
        let (state, _) = update(state, Msg::ContactSubmitted);
        let (state, _) = update(
            state,
            Msg::SubmissionSettled {
                form: pavilion_core::FormKind::Contact,
                delivered: false,
            },
        );
        let text = render(&state.view());
        assert!(!text.contains("failed"));

        let (state, _) = update(state, Msg::RouteChanged(Route::Careers));
        let (state, _) = update(state, Msg::CareersSubmitted);
        let (state, _) = update(
            state,
            Msg::SubmissionSettled {
                form: pavilion_core::FormKind::Careers,
                delivered: false,
            },
        );
        let text = render(&state.view());
        assert!(text.contains(CAREERS_FAILURE));
    }
}
