use std::fmt::Write as _;

use crate::html::escape;
use crate::i18n::LANGUAGES;

/// Language switcher: one `?lang=xx` link per registered language.
#[must_use]
pub fn render_switcher(current: &str) -> String {
    let mut markup = String::from(
        "<div class=\"lang-switcher\" role=\"navigation\" aria-label=\"Language selection\">\n\
         <div class=\"lang-list\" aria-labelledby=\"lang-selector-label\">\n\
         <span class=\"lang-label\" id=\"lang-selector-label\">Language: </span>\n",
    );

    for language in &LANGUAGES {
        let code = escape(language.code);
        let name = escape(language.name);
        let active = if language.code == current { r#" class="active""# } else { "" };
        let _ = writeln!(
            markup,
            r#"<a href="?lang={code}" data-lang="{code}" lang="{code}" aria-label="Switch to {name}" role="button"{active}>{name}</a>"#
        );
    }

    markup.push_str("</div>\n</div>\n");
    markup
}
