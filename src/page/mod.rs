//! Static page rendering
/// Translatable elements
mod element;
/// Language switcher
mod switcher;

pub use element::{
    Element,
    ElementKind,
};
pub use switcher::render_switcher;

use crate::companies::{
    CompanyListing,
    render_listing,
};
use crate::html::escape;
use crate::i18n::Translator;

/// Settings that are not translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// GitHub repository as `owner/name`.
    pub repository: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { repository: "foss4gov/foss4gov".to_string() }
    }
}

/// One labelled form input.
struct Field {
    /// `id` and `name` of the input.
    id: &'static str,
    /// Input type.
    input_type: &'static str,
    /// Translation key of the label.
    key: &'static str,
    /// English label.
    default: &'static str,
    /// Whether the input is required.
    required: bool,
}

/// Form inputs in CSV column order.
const FORM_FIELDS: [Field; 7] = [
    Field { id: "name", input_type: "text", key: "form.name", default: "Company name *", required: true },
    Field {
        id: "english",
        input_type: "text",
        key: "form.english",
        default: "English alternative (if applicable)",
        required: false,
    },
    Field { id: "website", input_type: "url", key: "form.website", default: "Website *", required: true },
    Field { id: "email", input_type: "email", key: "form.email", default: "Info email", required: false },
    Field {
        id: "linkedin",
        input_type: "url",
        key: "form.linkedin",
        default: "LinkedIn profile",
        required: false,
    },
    Field { id: "github", input_type: "url", key: "form.github", default: "GitHub profile", required: false },
    Field {
        id: "otherRepo",
        input_type: "url",
        key: "form.other_repo",
        default: "Other public Git repository",
        required: false,
    },
];

/// Appends each element on its own line.
fn push_all(markup: &mut String, translator: &Translator, elements: &[Element<'_>]) {
    for element in elements {
        markup.push_str(&element.render(translator));
        markup.push('\n');
    }
}

/// Header with title, navigation and language switcher.
fn header(markup: &mut String, translator: &Translator, repository: &str) {
    markup.push_str("<header>\n<div class=\"wrap\">\n");
    push_all(markup, translator, &[
        Element::text("h1", "app.title", "FOSS4Gov"),
        Element::text("p", "app.tagline", "Open Source Companies for Government").attr("class", "tagline"),
    ]);
    markup.push_str("<nav aria-label=\"Main\">\n");
    push_all(markup, translator, &[
        Element::text("a", "nav.home", "Home").attr("href", "#top"),
        Element::text("a", "nav.companies", "Companies").attr("href", "#companies"),
        Element::text("a", "nav.contribute", "Contribute").attr("href", "#contribute"),
        Element::text("a", "nav.add_company", "Add your company").attr("href", "#submit-form"),
        Element::text("a", "nav.create_issue", "Create a GitHub Issue")
            .attr("href", format!("https://github.com/{repository}/issues/new")),
    ]);
    markup.push_str("</nav>\n");
    markup.push_str(&render_switcher(translator.language()));
    markup.push_str("</div>\n</header>\n");
}

/// Contribution steps and notices.
fn contribute(markup: &mut String, translator: &Translator) {
    markup.push_str("<section id=\"contribute\">\n");
    push_all(markup, translator, &[Element::text("h2", "contribute.title", "How to contribute")]);
    markup.push_str("<ol>\n");
    push_all(markup, translator, &[
        Element::text("li", "contribute.step1", "Fork the repository."),
        Element::text(
            "li",
            "contribute.step2",
            "Add your company to the companies.csv file and submit a Pull Request.",
        ),
        Element::text(
            "li",
            "contribute.step3",
            "Or, create a GitHub Issue with the same details using the form below.",
        ),
    ]);
    markup.push_str("</ol>\n");
    push_all(markup, translator, &[
        Element::text(
            "p",
            "contribute.merit_notice",
            "No ads, no pay-to-play. Listing is merit based and focused on real FOSS contributions to digital public goods.",
        ),
        Element::text(
            "p",
            "contribute.data_notice",
            "This page does not collect or store form data. The form below generates a prefilled GitHub Issue link or PR payload for you to submit to the repository.",
        ),
    ]);
    markup.push_str("</section>\n");
}

/// Company cards.
fn companies(markup: &mut String, translator: &Translator, listing: &CompanyListing) {
    markup.push_str("<section id=\"companies\">\n");
    push_all(markup, translator, &[Element::text("h2", "companies.title", "Listed Companies")]);
    markup.push_str("<div id=\"company-list\" aria-live=\"polite\">\n");
    markup.push_str(&render_listing(listing, translator));
    markup.push_str("</div>\n</section>\n");
}

/// Listing criteria.
fn criteria(markup: &mut String, translator: &Translator) {
    markup.push_str("<section id=\"criteria\">\n");
    push_all(markup, translator, &[Element::text("h2", "criteria.title", "Listing criteria")]);
    markup.push_str("<ul>\n");
    push_all(markup, translator, &[
        Element::text(
            "li",
            "criteria.item1",
            "Active use of FOSS in delivery of government digital services.",
        ),
        Element::text(
            "li",
            "criteria.item2",
            "Documented contributions to upstream projects. Examples include merged pull requests, maintainership, or financial support with transparency.",
        ),
        Element::text(
            "li",
            "criteria.item3",
            "Clear governance and security practices. Preference for OSI-approved licenses.",
        ),
    ]);
    markup.push_str("</ul>\n</section>\n");
}

/// Submission form and its output area.
fn form(markup: &mut String, translator: &Translator) {
    markup.push_str("<section id=\"submit-form\">\n");
    push_all(markup, translator, &[
        Element::text("h2", "form.title", "Generate your submission"),
        Element::text("p", "form.required_notice", "Fields marked with * are required."),
    ]);
    markup.push_str("<div id=\"errorSummary\" role=\"alert\" hidden>\n");
    push_all(markup, translator, &[Element::text("strong", "form.validation.error_heading", "Form Error:")]);
    markup.push_str("</div>\n<form id=\"companyForm\" novalidate>\n");

    for field in &FORM_FIELDS {
        let mut input = Element::placeholder(field.key, field.default)
            .attr("type", field.input_type)
            .attr("id", field.id)
            .attr("name", field.id);
        if field.required {
            input = input.attr("required", "required");
        }
        push_all(markup, translator, &[
            Element::text("label", field.key, field.default).attr("for", field.id),
            input,
        ]);
    }

    push_all(markup, translator, &[
        Element::text("button", "form.build_issue", "Build GitHub Issue")
            .attr("type", "button")
            .attr("id", "buildIssue"),
        Element::text("button", "form.build_csv", "Build CSV row for PR")
            .attr("type", "button")
            .attr("id", "buildCsv"),
        Element::submit("form.submit", "Submit"),
    ]);
    markup.push_str("</form>\n<div id=\"output\" hidden>\n");
    push_all(markup, translator, &[
        Element::text("h3", "form.output.issue_link", "GitHub Issue Link:"),
        Element::text("h3", "form.output.csv_row", "CSV Row:"),
    ]);
    markup.push_str("</div>\n</section>\n");
}

/// Footer notices.
fn footer(markup: &mut String, translator: &Translator, repository: &str) {
    markup.push_str("<footer>\n<div class=\"wrap\">\n");
    push_all(markup, translator, &[
        Element::text("p", "footer.privacy", "Built for openness and speed. No trackers. No cookies."),
        Element::text(
            "p",
            "footer.accessibility",
            "Keyboard tips: Tab to move focus. Shift+Tab to go back. Enter to activate buttons and links.",
        ),
        Element::text(
            "p",
            "footer.a11y_info",
            "This site aims to meet WCAG 2.2 AA standards with proper keyboard navigation, focus indicators, color contrast, and screen reader support.",
        ),
        Element::text("a", "footer.report_issues", "Report accessibility issues")
            .attr("href", format!("https://github.com/{repository}/issues")),
    ]);
    markup.push_str("</div>\n</footer>\n");
}

/// Renders the whole page in the translator's language.
///
/// Keys missing from both the active catalog and English keep the English
/// literal built into the page.
#[must_use]
pub fn render_page(translator: &Translator, listing: &CompanyListing, options: &PageOptions) -> String {
    let repository = options.repository.trim_matches('/');
    tracing::debug!(language = translator.language(), repository, "Rendering page");

    let mut markup = format!(
        "<!DOCTYPE html>\n<html lang=\"{}\" id=\"htmlRoot\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        escape(translator.language())
    );
    push_all(&mut markup, translator, &[Element::text("title", "app.title", "FOSS4Gov")]);
    markup.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body id=\"top\">\n");
    push_all(&mut markup, translator, &[
        Element::text("a", "navigation.skip_to_form", "Skip to submission form")
            .attr("class", "skip-link")
            .attr("href", "#submit-form"),
    ]);

    header(&mut markup, translator, repository);
    markup.push_str("<main class=\"wrap\">\n");
    push_all(&mut markup, translator, &[Element::text(
        "p",
        "app.description",
        "Open innovation allows governments to adapt, experiment, and avoid lock-in. Collaboration is essential to healthy democracies. Public code strengthens digital public goods.",
    )]);
    contribute(&mut markup, translator);
    companies(&mut markup, translator, listing);
    criteria(&mut markup, translator);
    form(&mut markup, translator);
    markup.push_str("</main>\n");
    footer(&mut markup, translator, repository);
    markup.push_str("</body>\n</html>\n");
    markup
}
