// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report collecting the demo SVGs.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:24px;background:#fafafa}\
         section{margin-bottom:32px}svg{background:white;border:1px solid #ddd}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&format!("<p>{}</p>\n", section.description));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body></html>\n");
    out
}
