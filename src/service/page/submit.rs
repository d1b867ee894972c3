use scraper::Html;

use crate::macros::select;
use crate::service::scrape::ElementRefExt as _;

/// Hidden token of the submission form.
pub fn form_token(html: &Html) -> Option<String> {
    html.select(select!(
        "form#problem-submission input#edit-problem-submission-form-token"
    ))
    .next()?
    .value()
    .attr("value")
    .map(str::to_owned)
}

/// Resolves a user-facing language name to the site's internal code by
/// scanning the `#edit-language` dropdown. Option labels look like
/// "PYTH 3.6(python 3.6)", so the match is `name + "("` case-insensitively.
pub fn language_code(html: &Html, language: &str) -> Option<String> {
    let needle = format!("{}(", language.to_lowercase());
    html.select(select!("form#problem-submission select#edit-language option"))
        .find_map(|option| {
            if option.normalized_text().to_lowercase().contains(&needle) {
                option.value().attr("value").map(str::to_owned)
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_page() -> Html {
        Html::parse_document(
            "<form id='problem-submission'>\
                <input id='edit-problem-submission-form-token' value='tok123' />\
                <select id='edit-language'>\
                    <option value='116'>PYTH 3.6(python 3.6)</option>\
                    <option value='63'>JAVA(java 8)</option>\
                </select>\
            </form>",
        )
    }

    #[test]
    fn form_token_value() {
        assert_eq!(form_token(&submit_page()), Some("tok123".to_owned()));
    }

    #[test]
    fn form_token_missing() {
        let html = Html::parse_document("<form id='problem-submission'></form>");
        assert_eq!(form_token(&html), None);
    }

    #[test]
    fn language_code_is_case_insensitive() {
        assert_eq!(language_code(&submit_page(), "pyth 3.6"), Some("116".to_owned()));
        assert_eq!(language_code(&submit_page(), "Java"), Some("63".to_owned()));
    }

    #[test]
    fn language_code_unknown_language() {
        assert_eq!(language_code(&submit_page(), "cobol"), None);
    }
}
