// ABOUTME: Converts HTML-bearing prose into plain text for safe display
// ABOUTME: Tags are dropped and text nodes concatenated in document order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use scraper::{Html, Selector};

/// Plain-text content of an HTML fragment.
///
/// Entities are decoded by the HTML parser; nothing is re-encoded. `None`
/// and empty input both yield an empty string.
#[must_use]
pub fn plain_text(html: Option<&str>) -> String {
    let Some(html) = html.filter(|html| !html.is_empty()) else {
        return String::new();
    };
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}

/// Instruction steps from free-form HTML.
///
/// Each `<li>` or `<p>` becomes one step when the fragment has any; otherwise
/// the plain text is split into non-empty lines.
#[must_use]
pub fn plain_text_steps(html: Option<&str>) -> Vec<String> {
    let Some(html) = html.filter(|html| !html.is_empty()) else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(html);

    let blocks: Vec<String> = Selector::parse("li, p")
        .map(|selector| {
            fragment
                .select(&selector)
                .filter(|element| element.select(&selector).next().is_none())
                .map(|element| element.text().collect::<String>().trim().to_owned())
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !blocks.is_empty() {
        return blocks;
    }

    fragment
        .root_element()
        .text()
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
