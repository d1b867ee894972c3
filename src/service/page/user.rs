use scraper::Html;

use crate::macros::{regex, select};
use crate::service::scrape::ElementRefExt as _;

/// Assembles the profile text from the user page. Returns `None` when the
/// profile container is missing (the markup changed or the page is not a
/// profile at all).
pub fn profile_text(html: &Html, username: &str, base_url: &str) -> Option<String> {
    let header = html
        .select(select!(".user-details-container header"))
        .next()?
        .normalized_text();
    let star_rating = html
        .select(select!(".user-details-container .rating"))
        .next()
        .map(|span| span.normalized_text())
        .unwrap_or_default();
    let rating = html
        .select(select!(".rating-number"))
        .next()
        .map(|div| div.normalized_text())
        .unwrap_or_default();

    // First item repeats the username and star badge, last one is a link row.
    let items: Vec<String> = html
        .select(select!(".user-details li"))
        .map(|li| {
            regex!(r"\d+★")
                .replace_all(&li.normalized_text(), "")
                .trim()
                .to_owned()
        })
        .collect();
    let details = match items.len() {
        0 | 1 | 2 => String::new(),
        len => items[1..len - 1]
            .iter()
            .map(|item| format!("{}\n", item))
            .collect(),
    };

    let mut ranks = html
        .select(select!(".rating-ranks li"))
        .map(|li| {
            li.normalized_text()
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_owned()
        });
    let global_rank = ranks.next().unwrap_or_default();
    let country_rank = ranks.next().unwrap_or_default();

    Some(format!(
        "\nUser Details for {header} ({username}):\n\n\
         {details}\
         User's Teams: {base}/users/{username}/teams/\n\n\
         Rating: {star} {rating}\n\
         Global Rank: {global}\n\
         Country Rank: {country}\n\n\
         Find more at: {base}/users/{username}/\n",
        header = header,
        username = username,
        details = details,
        base = base_url,
        star = star_rating,
        rating = rating,
        global = global_rank,
        country = country_rank,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_page() -> Html {
        Html::parse_document(
            "<div class='user-details-container'>\
                <header>ABCD's Profile</header>\
                <div class='user-details'>\
                    <li>abcd 4★</li>\
                    <li>Country: Wonderland</li>\
                    <li>Institution: Some School</li>\
                    <li>Teams list</li>\
                </div>\
                <div class='rating'>4★</div>\
            </div>\
            <div class='rating-number'>1111</div>\
            <div class='rating-ranks'>\
                <li><a>123</a></li>\
                <li><a>11</a></li>\
            </div>",
        )
    }

    #[test]
    fn profile_text_layout() {
        let text = profile_text(&profile_page(), "abcd", "https://www.codechef.com").unwrap();
        assert!(text.starts_with("\nUser Details for ABCD's Profile (abcd):\n"));
        assert!(text.contains("Country: Wonderland\n"));
        assert!(text.contains("Institution: Some School\n"));
        // first and last detail items are dropped
        assert!(!text.contains("abcd 4"));
        assert!(!text.contains("Teams list"));
        assert!(text.contains("User's Teams: https://www.codechef.com/users/abcd/teams/\n"));
        assert!(text.contains("Rating: 4★ 1111\n"));
        assert!(text.contains("Global Rank: 123\n"));
        assert!(text.contains("Country Rank: 11\n"));
        assert!(text.ends_with("Find more at: https://www.codechef.com/users/abcd/\n"));
    }

    #[test]
    fn profile_text_requires_container() {
        let html = Html::parse_document("<div class='somewhere-else'></div>");
        assert_eq!(profile_text(&html, "abcd", "https://www.codechef.com"), None);
    }
}
