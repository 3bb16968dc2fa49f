//! Company card markup

use super::Company;
use crate::html::escape;

/// Profile links of a company, in display order.
fn links(company: &Company) -> Vec<String> {
    let mut links = Vec::new();
    if !company.github.is_empty() {
        links.push(format!(r#"<a href="{}">GitHub</a>"#, escape(&company.github)));
    }
    if !company.linkedin.is_empty() {
        links.push(format!(r#"<a href="{}">LinkedIn</a>"#, escape(&company.linkedin)));
    }
    if !company.other_repo.is_empty() {
        links.push(format!(r#"<a href="{}">Git Repo</a>"#, escape(&company.other_repo)));
    }
    if !company.info_email.is_empty() {
        links.push(format!(r#"<a href="mailto:{}">Email</a>"#, escape(&company.info_email)));
    }
    links
}

/// Renders one company as a card.
#[must_use]
pub fn render_card(company: &Company) -> String {
    let mut card = String::from("<div class=\"card\">\n");
    card.push_str(&format!(
        "  <h3><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></h3>\n",
        escape(&company.website),
        escape(&company.name)
    ));
    if !company.english_name.is_empty() {
        card.push_str(&format!("  <p><em>({})</em></p>\n", escape(&company.english_name)));
    }
    let links = links(company);
    if !links.is_empty() {
        card.push_str(&format!("  <p class=\"links\">{}</p>\n", links.join(" | ")));
    }
    card.push_str("</div>\n");
    card
}
